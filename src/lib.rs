//! Minimal leveled console logger.
//!
//! Named loggers write records of the form
//!
//! ```text
//! [COLOR][2024-03-09T14:05:07.042Z|]WARN|[svc|]disk low\n[RESET]
//! ```
//!
//! to stdout (warn, info, debug, trace) or stderr (fatal, error).
//!
//! ```
//! use sticklog::{LoggerRegistry, Verbosity};
//!
//! let registry = LoggerRegistry::new();
//! let log = registry.get_logger(Some("svc"), Some(Verbosity::Info));
//! log.warn(&[&"disk", &"low"]);
//! log.debug(&[&"suppressed"]);
//! ```

pub mod config;
pub mod console;
pub mod level;
pub mod logger;
pub mod registry;

mod macros;

pub use config::{LoggerConfig, LoggerDefaults};
pub use console::{Console, MemoryConsole, StdConsole, Stream};
pub use level::{LevelDescriptor, Verbosity, VerbosityError, LEVELS};
pub use logger::Logger;
pub use registry::{get_logger, global, LoggerRegistry};
