//! Level macros.
//!
//! Each macro takes a logger and either a format string or a `;`-separated
//! list of values:
//!
//! ```
//! use sticklog::{info, warn, LoggerRegistry, Verbosity};
//!
//! let registry = LoggerRegistry::new();
//! let log = registry.get_logger(Some("svc"), Some(Verbosity::Info));
//! let free = 12;
//! info!(log, "free space: {free}%");
//! warn!(log; "disk", "low");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __sticklog_log {
    ($level:expr, $logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $logger.log_fmt($level, ::std::format_args!($fmt $(, $arg)*))
    };
    ($level:expr, $logger:expr; $($value:expr),+ $(,)?) => {
        $logger.log($level, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

#[macro_export]
macro_rules! fatal {
    ($($tt:tt)+) => { $crate::__sticklog_log!($crate::Verbosity::Fatal, $($tt)+) };
}

#[macro_export]
macro_rules! error {
    ($($tt:tt)+) => { $crate::__sticklog_log!($crate::Verbosity::Error, $($tt)+) };
}

#[macro_export]
macro_rules! warn {
    ($($tt:tt)+) => { $crate::__sticklog_log!($crate::Verbosity::Warn, $($tt)+) };
}

#[macro_export]
macro_rules! info {
    ($($tt:tt)+) => { $crate::__sticklog_log!($crate::Verbosity::Info, $($tt)+) };
}

#[macro_export]
macro_rules! debug {
    ($($tt:tt)+) => { $crate::__sticklog_log!($crate::Verbosity::Debug, $($tt)+) };
}

#[macro_export]
macro_rules! trace {
    ($($tt:tt)+) => { $crate::__sticklog_log!($crate::Verbosity::Trace, $($tt)+) };
}
