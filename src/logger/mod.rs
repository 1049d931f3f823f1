//! Named loggers.
//!
//! # Responsibilities
//! - Drop records more verbose than the configured threshold
//! - Render the record prefix (color, timestamp, level, name)
//! - Write the record to the stream selected by its level
//!
//! # Design Decisions
//! - Payloads are `Display` values joined by single spaces
//! - Each record is rendered fully before writing, and writes are serialized
//!   per logger, so concurrent records never interleave
//! - Logging is infallible for callers; write failures go to `tracing`

pub mod format;

use std::backtrace::Backtrace;
use std::fmt::{self, Display};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use chrono::Utc;

use crate::config::LoggerConfig;
use crate::console::Console;
use crate::level::Verbosity;

pub use format::Joined;

/// A named, leveled console logger.
#[derive(Debug)]
pub struct Logger {
    config: ArcSwap<LoggerConfig>,
    console: Arc<dyn Console>,
    /// Held while a record is written, for consoles that do not serialize
    /// their own writes.
    emit_lock: Mutex<()>,
    /// Held across read-modify-store of `config`.
    update_lock: Mutex<()>,
    /// Set after the first failed write so failures are reported once.
    write_failed: AtomicBool,
}

impl Logger {
    /// Create a logger writing to `console`.
    pub fn new(config: LoggerConfig, console: Arc<dyn Console>) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
            console,
            emit_lock: Mutex::new(()),
            update_lock: Mutex::new(()),
            write_failed: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> Arc<LoggerConfig> {
        self.config.load_full()
    }

    pub fn name(&self) -> String {
        self.config.load().name.clone()
    }

    pub fn verbosity(&self) -> Verbosity {
        self.config.load().verbosity
    }

    /// Returns true if records of `level` would be written.
    pub fn is_enabled(&self, level: Verbosity) -> bool {
        self.config.load().verbosity.is_enabled_for(level)
    }

    /// Apply `update` to a copy of the current configuration and publish it.
    ///
    /// Concurrent updates are applied one after another, each seeing the
    /// result of the previous one. The name is kept. Records already being
    /// written keep the old snapshot.
    pub(crate) fn update_config<F>(&self, update: F) -> Arc<LoggerConfig>
    where
        F: FnOnce(&mut LoggerConfig),
    {
        let _guard = self.update_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.config.load_full();
        let mut config = current.as_ref().clone();
        update(&mut config);
        config.name.clone_from(&current.name);

        let config = Arc::new(config);
        self.config.store(Arc::clone(&config));
        config
    }

    pub fn trace(&self, values: &[&dyn Display]) {
        self.log(Verbosity::Trace, values);
    }

    pub fn debug(&self, values: &[&dyn Display]) {
        self.log(Verbosity::Debug, values);
    }

    pub fn info(&self, values: &[&dyn Display]) {
        self.log(Verbosity::Info, values);
    }

    pub fn warn(&self, values: &[&dyn Display]) {
        self.log(Verbosity::Warn, values);
    }

    pub fn error(&self, values: &[&dyn Display]) {
        self.log(Verbosity::Error, values);
    }

    pub fn fatal(&self, values: &[&dyn Display]) {
        self.log(Verbosity::Fatal, values);
    }

    /// Write `values`, space separated, at `level`.
    pub fn log(&self, level: Verbosity, values: &[&dyn Display]) {
        self.emit(level, &Joined(values));
    }

    /// Write a pre-formatted payload at `level`.
    pub fn log_fmt(&self, level: Verbosity, args: fmt::Arguments<'_>) {
        self.emit(level, &args);
    }

    fn emit(&self, level: Verbosity, payload: &dyn Display) {
        let config = self.config.load();
        if !config.verbosity.is_enabled_for(level) {
            return;
        }

        let backtrace = (level == Verbosity::Trace && config.trace_backtrace)
            .then(Backtrace::force_capture);
        let trailer = backtrace.as_ref().map(|bt| bt as &dyn Display);
        let record = format::render(&config, level, payload, Utc::now(), trailer);
        let stream = config.descriptor(level).stream;

        let _guard = self.emit_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = self.console.write_record(stream, record.as_bytes()) {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                tracing::warn!(
                    logger = %config.name,
                    level = %level,
                    error = %err,
                    "Failed to write log record; further failures are not reported"
                );
            }
        }
    }
}
