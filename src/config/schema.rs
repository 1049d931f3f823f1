//! Configuration schema definitions.
//!
//! All types derive Serde traits so host applications can embed them in
//! their own configuration files.

use serde::{Deserialize, Serialize};

use crate::level::{LevelDescriptor, Verbosity, LEVELS};

/// Resolved configuration of a single logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Logger name, written after the level name. Empty for the default logger.
    pub name: String,

    /// Threshold: records more verbose than this are dropped.
    pub verbosity: Verbosity,

    /// Wrap records in ANSI color sequences.
    pub colored_console: bool,

    /// Prefix records with an ISO-8601 UTC timestamp.
    pub include_timestamp: bool,

    /// Append a captured backtrace to trace records.
    pub trace_backtrace: bool,

    /// Level table used for presentation.
    #[serde(skip_deserializing)]
    pub levels: &'static [LevelDescriptor; 7],
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            verbosity: Verbosity::Debug,
            colored_console: true,
            include_timestamp: true,
            trace_backtrace: false,
            levels: &LEVELS,
        }
    }
}

impl LoggerConfig {
    /// Config for `name` at `verbosity`, other options at their defaults.
    pub fn new(name: impl Into<String>, verbosity: Verbosity) -> Self {
        Self {
            name: name.into(),
            verbosity,
            ..Self::default()
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colored_console = enabled;
        self
    }

    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.include_timestamp = enabled;
        self
    }

    pub fn with_trace_backtrace(mut self, enabled: bool) -> Self {
        self.trace_backtrace = enabled;
        self
    }

    /// Presentation metadata for `level`.
    pub fn descriptor(&self, level: Verbosity) -> &'static LevelDescriptor {
        &self.levels[usize::from(level.rank())]
    }
}

/// Options a registry applies to every logger it creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerDefaults {
    /// Threshold used when `get_logger` is called without one.
    pub verbosity: Verbosity,

    pub colored_console: bool,

    pub include_timestamp: bool,

    pub trace_backtrace: bool,
}

impl Default for LoggerDefaults {
    fn default() -> Self {
        let config = LoggerConfig::default();
        Self {
            verbosity: config.verbosity,
            colored_console: config.colored_console,
            include_timestamp: config.include_timestamp,
            trace_backtrace: config.trace_backtrace,
        }
    }
}

impl LoggerDefaults {
    /// Build the config of a new logger named `name`.
    ///
    /// `verbosity` overrides the default threshold when given.
    pub fn config_for(&self, name: &str, verbosity: Option<Verbosity>) -> LoggerConfig {
        LoggerConfig {
            name: name.to_string(),
            verbosity: verbosity.unwrap_or(self.verbosity),
            colored_console: self.colored_console,
            include_timestamp: self.include_timestamp,
            trace_backtrace: self.trace_backtrace,
            levels: &LEVELS,
        }
    }
}
