//! Shared utilities for integration tests.

use std::sync::Arc;

use sticklog::{LoggerDefaults, LoggerRegistry, MemoryConsole};

/// A registry writing into a fresh capture.
pub fn capture_registry(defaults: LoggerDefaults) -> (LoggerRegistry, MemoryConsole) {
    let console = MemoryConsole::new();
    let registry = LoggerRegistry::with_console(Arc::new(console.clone())).with_defaults(defaults);
    (registry, console)
}

/// Defaults with colors and timestamps off, so records are deterministic.
#[allow(dead_code)]
pub fn plain_defaults() -> LoggerDefaults {
    LoggerDefaults {
        colored_console: false,
        include_timestamp: false,
        ..LoggerDefaults::default()
    }
}

/// Returns true if `ts` looks like `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[allow(dead_code)]
pub fn is_iso_timestamp(ts: &str) -> bool {
    let bytes = ts.as_bytes();
    if bytes.len() != 24 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        10 => *b == b'T',
        13 | 16 => *b == b':',
        19 => *b == b'.',
        23 => *b == b'Z',
        _ => b.is_ascii_digit(),
    })
}

/// Remove every ANSI escape sequence from `s`.
#[allow(dead_code)]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
