//! Logging macros for ergonomic log message formatting.
//!
//! The macros take `format!` syntax and emit through the global logger, so
//! [`initialize`](crate::initialize) must have run first.
//!
//! # Examples
//!
//! ```no_run
//! use level_partition_logger::{info, warn, LogConfiguration};
//!
//! level_partition_logger::initialize(LogConfiguration::new("logs"))?;
//!
//! info!("Server started");
//!
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! warn!("Retry attempt {} of {}", 3, 5);
//! # Ok::<(), level_partition_logger::LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// ```no_run
/// use level_partition_logger::{log, LogLevel};
/// log!(LogLevel::Panic, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log($level, format!($($arg)+))
    };
}

/// Log a trace message. Trace records are written at Debug level.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message and **terminate the process**.
///
/// This is the one place that turns a [`FatalEmit`](crate::FatalEmit) into
/// an exit. Tests must use [`fatal`](crate::fatal) instead, which returns
/// the effect without exiting.
///
/// ```no_run
/// use level_partition_logger::fatal;
/// fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::fatal(&[&format!($($arg)+)]).exit()
    };
}
