//! Presentation metadata for each verbosity rank.

use serde::Serialize;

use super::Verbosity;
use crate::console::Stream;

/// ANSI sequence that restores the terminal's default colors.
pub const RESET: &str = "\u{1b}[0m";

/// How records of one rank are presented and where they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelDescriptor {
    /// Rank this descriptor belongs to.
    pub level: Verbosity,
    /// Display name written in the record prefix.
    pub name: &'static str,
    /// ANSI escape written before the record when coloring is on. May be empty.
    pub color: &'static str,
    /// Destination stream.
    pub stream: Stream,
}

/// The level table, indexed by rank.
pub static LEVELS: [LevelDescriptor; 7] = [
    LevelDescriptor {
        level: Verbosity::None,
        name: "NONE",
        color: "",
        stream: Stream::Discard,
    },
    LevelDescriptor {
        level: Verbosity::Fatal,
        name: "FATAL",
        color: "\u{1b}[37m\u{1b}[41m",
        stream: Stream::Stderr,
    },
    LevelDescriptor {
        level: Verbosity::Error,
        name: "ERROR",
        color: "\u{1b}[31m",
        stream: Stream::Stderr,
    },
    LevelDescriptor {
        level: Verbosity::Warn,
        name: "WARN",
        color: "\u{1b}[33m",
        stream: Stream::Stdout,
    },
    LevelDescriptor {
        level: Verbosity::Info,
        name: "INFO",
        color: "\u{1b}[32m",
        stream: Stream::Stdout,
    },
    LevelDescriptor {
        level: Verbosity::Debug,
        name: "DEBUG",
        color: "",
        stream: Stream::Stdout,
    },
    LevelDescriptor {
        level: Verbosity::Trace,
        name: "TRACE",
        color: "\u{1b}[36m",
        stream: Stream::Stdout,
    },
];

/// Look up the descriptor for `level`.
pub fn descriptor(level: Verbosity) -> &'static LevelDescriptor {
    &LEVELS[usize::from(level.rank())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_indexed_by_rank() {
        for (index, entry) in LEVELS.iter().enumerate() {
            assert_eq!(usize::from(entry.level.rank()), index);
            assert_eq!(descriptor(entry.level), entry);
        }
    }

    #[test]
    fn test_stream_split() {
        assert_eq!(descriptor(Verbosity::None).stream, Stream::Discard);
        assert_eq!(descriptor(Verbosity::Fatal).stream, Stream::Stderr);
        assert_eq!(descriptor(Verbosity::Error).stream, Stream::Stderr);
        for level in [Verbosity::Warn, Verbosity::Info, Verbosity::Debug, Verbosity::Trace] {
            assert_eq!(descriptor(level).stream, Stream::Stdout);
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(descriptor(Verbosity::Fatal).color, "\u{1b}[37m\u{1b}[41m");
        assert_eq!(descriptor(Verbosity::Warn).color, "\u{1b}[33m");
        assert!(descriptor(Verbosity::Debug).color.is_empty());
        assert!(descriptor(Verbosity::None).color.is_empty());
    }
}
