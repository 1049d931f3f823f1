//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! LoggerDefaults (held by the registry)
//!     → config_for(name, verbosity) on first get_logger
//!     → LoggerConfig (immutable snapshot)
//!     → shared via Arc with the Logger
//!
//! On reconfigure(name, f):
//!     clone of current snapshot
//!     → f mutates the clone
//!     → atomic swap of Arc<LoggerConfig>
//!     → later records observe the new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once published; changes replace the whole snapshot
//! - All fields have defaults to allow minimal configs
//! - Configuration is built in code; this crate never reads files or env vars

pub mod schema;

pub use schema::LoggerConfig;
pub use schema::LoggerDefaults;
