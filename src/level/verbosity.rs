//! Verbosity ranks and their conversions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity rank of a record, doubling as a logger's threshold.
///
/// Higher ranks are more verbose. A logger configured at rank `t` emits a
/// record of rank `r` only when `t >= r`.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    None = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    #[default]
    Debug = 5,
    Trace = 6,
}

/// Errors produced when converting foreign values into a [`Verbosity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerbosityError {
    /// Numeric rank outside `0..=6`.
    #[error("verbosity rank {0} is out of range (expected 0..=6)")]
    OutOfRange(i64),

    /// Name that matches no level.
    #[error("unknown verbosity level: {0:?}")]
    UnknownName(String),
}

impl Verbosity {
    /// Every rank, ordered from least to most verbose.
    pub const ALL: [Verbosity; 7] = [
        Verbosity::None,
        Verbosity::Fatal,
        Verbosity::Error,
        Verbosity::Warn,
        Verbosity::Info,
        Verbosity::Debug,
        Verbosity::Trace,
    ];

    /// Numeric rank.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as accepted by [`FromStr`] and used by serde.
    pub const fn as_str(self) -> &'static str {
        match self {
            Verbosity::None => "none",
            Verbosity::Fatal => "fatal",
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Returns true if a logger at this threshold emits records of `rank`.
    ///
    /// `None` is a threshold sentinel only and is never emitted as a record.
    pub fn is_enabled_for(self, rank: Verbosity) -> bool {
        rank != Verbosity::None && self >= rank
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(super::descriptor(*self).name)
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = VerbosityError;

    fn try_from(value: u8) -> Result<Self, VerbosityError> {
        Verbosity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(VerbosityError::OutOfRange(i64::from(value)))
    }
}

impl TryFrom<i64> for Verbosity {
    type Error = VerbosityError;

    fn try_from(value: i64) -> Result<Self, VerbosityError> {
        u8::try_from(value)
            .map_err(|_| VerbosityError::OutOfRange(value))
            .and_then(Verbosity::try_from)
    }
}

impl From<Verbosity> for u8 {
    fn from(level: Verbosity) -> Self {
        level.rank()
    }
}

impl FromStr for Verbosity {
    type Err = VerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<i64>() {
            return Verbosity::try_from(rank);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Verbosity::None),
            "fatal" => Ok(Verbosity::Fatal),
            "error" => Ok(Verbosity::Error),
            "warn" | "warning" => Ok(Verbosity::Warn),
            "info" => Ok(Verbosity::Info),
            "debug" => Ok(Verbosity::Debug),
            "trace" => Ok(Verbosity::Trace),
            _ => Err(VerbosityError::UnknownName(s.to_string())),
        }
    }
}
