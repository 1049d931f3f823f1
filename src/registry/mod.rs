//! Logger registry.
//!
//! # Responsibilities
//! - Hand out one `Logger` per name
//! - Build new loggers from the registry's defaults
//! - Apply explicit reconfiguration requests
//!
//! # Design Decisions
//! - First creation wins: a later `get_logger` for an existing name returns the
//!   existing logger and ignores the requested verbosity
//! - Insertion is atomic per name, so racing first calls build one logger
//! - Entries are never removed
//! - A lazily created process-wide registry backs the free `get_logger`

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::config::{LoggerConfig, LoggerDefaults};
use crate::console::{Console, StdConsole};
use crate::level::Verbosity;
use crate::logger::Logger;

/// Cache of named loggers sharing one console.
#[derive(Debug, Clone)]
pub struct LoggerRegistry {
    loggers: Arc<DashMap<String, Arc<Logger>>>,
    console: Arc<dyn Console>,
    defaults: LoggerDefaults,
}

impl LoggerRegistry {
    /// Registry writing to the process stdout/stderr with default options.
    pub fn new() -> Self {
        Self::with_console(Arc::new(StdConsole::new()))
    }

    /// Registry writing to `console`.
    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self {
            loggers: Arc::new(DashMap::new()),
            console,
            defaults: LoggerDefaults::default(),
        }
    }

    /// Replace the options applied to loggers created from now on.
    pub fn with_defaults(mut self, defaults: LoggerDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &LoggerDefaults {
        &self.defaults
    }

    /// Return the logger registered under `name`, creating it if needed.
    ///
    /// `name` defaults to the empty string (the default logger). `verbosity`
    /// only applies when the logger is created by this call.
    pub fn get_logger(&self, name: Option<&str>, verbosity: Option<Verbosity>) -> Arc<Logger> {
        let name = name.unwrap_or_default();
        if let Some(existing) = self.loggers.get(name) {
            return Arc::clone(existing.value());
        }

        let entry = self.loggers.entry(name.to_string()).or_insert_with(|| {
            let config = self.defaults.config_for(name, verbosity);
            tracing::debug!(
                logger = %name,
                verbosity = %config.verbosity,
                "Registered logger"
            );
            Arc::new(Logger::new(config, Arc::clone(&self.console)))
        });
        Arc::clone(entry.value())
    }

    /// Apply `update` to the configuration of an existing logger.
    ///
    /// The logger's name cannot be changed. Concurrent calls for the same
    /// logger are applied in turn, so none is lost. Returns false if no
    /// logger is registered under `name`.
    pub fn reconfigure<F>(&self, name: &str, update: F) -> bool
    where
        F: FnOnce(&mut LoggerConfig),
    {
        let Some(logger) = self.loggers.get(name).map(|r| Arc::clone(r.value())) else {
            return false;
        };

        let config = logger.update_config(update);

        tracing::info!(
            logger = %name,
            verbosity = %config.verbosity,
            colored_console = config.colored_console,
            include_timestamp = config.include_timestamp,
            "Logger reconfigured"
        );
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    /// Names of all registered loggers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry, writing to stdout/stderr.
pub fn global() -> &'static LoggerRegistry {
    GLOBAL.get_or_init(LoggerRegistry::new)
}

/// Shorthand for `global().get_logger(name, verbosity)`.
pub fn get_logger(name: Option<&str>, verbosity: Option<Verbosity>) -> Arc<Logger> {
    global().get_logger(name, verbosity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use std::thread;

    fn registry() -> (LoggerRegistry, MemoryConsole) {
        let console = MemoryConsole::new();
        let registry = LoggerRegistry::with_console(Arc::new(console.clone()));
        (registry, console)
    }

    #[test]
    fn test_same_name_same_instance() {
        let (registry, _) = registry();
        let first = registry.get_logger(Some("svc"), Some(Verbosity::Error));
        let second = registry.get_logger(Some("svc"), Some(Verbosity::Trace));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.verbosity(), Verbosity::Error);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_logger() {
        let (registry, _) = registry();
        let unnamed = registry.get_logger(None, None);
        let empty = registry.get_logger(Some(""), Some(Verbosity::Fatal));

        assert!(Arc::ptr_eq(&unnamed, &empty));
        assert_eq!(unnamed.name(), "");
        assert_eq!(unnamed.verbosity(), Verbosity::Debug);
    }

    #[test]
    fn test_registry_defaults() {
        let (registry, _) = registry();
        let registry = registry.with_defaults(LoggerDefaults {
            verbosity: Verbosity::Warn,
            include_timestamp: false,
            ..LoggerDefaults::default()
        });

        let logger = registry.get_logger(Some("a"), None);
        assert_eq!(logger.verbosity(), Verbosity::Warn);
        assert!(!logger.config().include_timestamp);
        assert!(logger.config().colored_console);
    }

    #[test]
    fn test_reconfigure() {
        let (registry, console) = registry();
        let logger = registry.get_logger(Some("db"), Some(Verbosity::Error));

        assert!(!registry.reconfigure("missing", |c| c.verbosity = Verbosity::Trace));
        assert!(registry.reconfigure("db", |c| {
            c.verbosity = Verbosity::Info;
            c.colored_console = false;
            c.include_timestamp = false;
            c.name = "renamed".to_string();
        }));

        logger.info(&[&"visible"]);
        assert_eq!(console.stdout(), "INFO|db|visible\n");
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn test_names() {
        let (registry, _) = registry();
        registry.get_logger(Some("b"), None);
        registry.get_logger(Some("a"), None);
        registry.get_logger(None, None);

        assert_eq!(registry.names(), vec!["", "a", "b"]);
    }

    #[test]
    fn test_concurrent_first_access() {
        let (registry, _) = registry();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.get_logger(Some("race"), None))
            })
            .collect();

        let loggers: Vec<Arc<Logger>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for logger in &loggers[1..] {
            assert!(Arc::ptr_eq(&loggers[0], logger));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_global_registry() {
        let first = get_logger(Some("registry-test-global"), Some(Verbosity::Fatal));
        let second = get_logger(Some("registry-test-global"), None);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(global().contains("registry-test-global"));
    }
}
