//! Output streams.
//!
//! # Data Flow
//! ```text
//! Logger::log
//!     → format.rs renders one complete record into a buffer
//!     → Console::write_record(stream, bytes)
//!         → StdConsole: process stdout / stderr
//!         → MemoryConsole: in-memory buffers (tests, embedding)
//! ```
//!
//! # Design Decisions
//! - A record is handed over in a single call so it cannot be split by
//!   concurrent writers on the same console
//! - The stream split (fatal/error vs everything else) is decided by the level
//!   table, not by the console

pub mod memory;
pub mod stdio;

use std::fmt;
use std::io;

use serde::Serialize;

pub use memory::MemoryConsole;
pub use stdio::StdConsole;

/// Destination stream of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    /// Records are dropped.
    Discard,
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// Sink for rendered records.
pub trait Console: Send + Sync + fmt::Debug {
    /// Write one complete record to `stream`.
    fn write_record(&self, stream: Stream, record: &[u8]) -> io::Result<()>;
}
