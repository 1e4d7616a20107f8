//! Logger facade and the process-wide instance
//!
//! [`initialize`] builds a [`Logger`] from configuration and publishes it as
//! the global instance. The free functions (`info`, `errorf`, ...) and the
//! macros emit through that instance from anywhere in the process.
//!
//! # Fatal records
//!
//! `fatal`/`fatalf` write and sync their record, then hand back a
//! [`FatalEmit`]. The process keeps running until the caller invokes
//! [`FatalEmit::exit`]. The `fatal!` macro does exit immediately; never use it
//! in tests.

use super::config::{ConfigSource, LogConfiguration};
use super::error::Result;
use super::log_entry::{CallerLocation, LogEntry};
use super::log_level::LogLevel;
use super::metrics::LoggerMetrics;
use super::output_format::Encoder;
use super::router::LevelRouter;
use super::template;
use crate::sinks;
use parking_lot::RwLock;
use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::Arc;

/// Exit status used by [`FatalEmit::exit`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// Global instance. Replaced wholesale on every successful `initialize`.
static GLOBAL: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// A fatal record has been written; the process is expected to terminate
#[must_use = "a fatal record was written; call `exit()` to terminate the process"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalEmit {
    message: String,
}

impl FatalEmit {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Terminate the process with [`FATAL_EXIT_CODE`]
    pub fn exit(self) -> ! {
        std::process::exit(FATAL_EXIT_CODE)
    }
}

impl fmt::Display for FatalEmit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.message)
    }
}

pub struct Logger {
    router: LevelRouter,
    threshold: Option<LogLevel>,
    name: String,
}

impl Logger {
    /// Create the log directory if needed, open all level files and build
    /// the encoder. Nothing is left half-built on error.
    pub fn from_config(config: &LogConfiguration) -> Result<Self> {
        config.validate()?;
        let threshold = config.threshold()?;

        sinks::ensure_directory(&config.director)?;
        let router = LevelRouter::build(config, Encoder::build(config))?;

        Ok(Self {
            router,
            threshold,
            name: config.prefix.clone(),
        })
    }

    pub fn router(&self) -> &LevelRouter {
        &self.router
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.router.metrics()
    }

    pub fn threshold(&self) -> Option<LogLevel> {
        self.threshold
    }

    /// Whether `level` passes the threshold pre-filter
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.threshold.map_or(true, |min| level >= min)
    }

    fn emit<F>(&self, level: LogLevel, render: F, caller: &Location<'_>) -> bool
    where
        F: FnOnce() -> String,
    {
        if !self.enabled(level) {
            self.router.metrics().record_filtered();
            return false;
        }

        let mut entry = LogEntry::new(level, render())
            .with_caller(CallerLocation::from_location(caller))
            .with_logger_name(&self.name);
        if level.captures_stacktrace() && self.router.encoder().stacktrace_key().is_some() {
            entry = entry.capture_stacktrace();
        }
        self.router.route(&entry)
    }

    fn emit_fatal(&self, message: String, caller: &Location<'_>) -> FatalEmit {
        let rendered = message.clone();
        self.emit(LogLevel::Fatal, move || rendered, caller);
        if let Err(e) = self.router.sync_level(LogLevel::Fatal) {
            eprintln!("[LOGGER ERROR] Failed to sync fatal log: {}", e);
        }
        FatalEmit { message }
    }

    /// Emit a prepared message. Returns `true` when a file accepted it.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> bool {
        self.emit(level, || message.into(), Location::caller())
    }

    /// Debug-level record; there is no separate trace file
    #[track_caller]
    pub fn trace(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Debug, || template::join_args(args), Location::caller());
    }

    #[track_caller]
    pub fn tracef(&self, template: &str, args: &[&dyn Display]) {
        self.emit(LogLevel::Debug, || template::render(template, args), Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Debug, || template::join_args(args), Location::caller());
    }

    #[track_caller]
    pub fn debugf(&self, template: &str, args: &[&dyn Display]) {
        self.emit(LogLevel::Debug, || template::render(template, args), Location::caller());
    }

    #[track_caller]
    pub fn info(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Info, || template::join_args(args), Location::caller());
    }

    #[track_caller]
    pub fn infof(&self, template: &str, args: &[&dyn Display]) {
        self.emit(LogLevel::Info, || template::render(template, args), Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Warn, || template::join_args(args), Location::caller());
    }

    #[track_caller]
    pub fn warnf(&self, template: &str, args: &[&dyn Display]) {
        self.emit(LogLevel::Warn, || template::render(template, args), Location::caller());
    }

    #[track_caller]
    pub fn error(&self, args: &[&dyn Display]) {
        self.emit(LogLevel::Error, || template::join_args(args), Location::caller());
    }

    #[track_caller]
    pub fn errorf(&self, template: &str, args: &[&dyn Display]) {
        self.emit(LogLevel::Error, || template::render(template, args), Location::caller());
    }

    /// Write a Panic-level record, then panic the calling thread
    #[track_caller]
    pub fn panic(&self, args: &[&dyn Display]) -> ! {
        let message = template::join_args(args);
        let rendered = message.clone();
        self.emit(LogLevel::Panic, move || rendered, Location::caller());
        panic!("{}", message)
    }

    #[track_caller]
    pub fn panicf(&self, template: &str, args: &[&dyn Display]) -> ! {
        let message = template::render(template, args);
        let rendered = message.clone();
        self.emit(LogLevel::Panic, move || rendered, Location::caller());
        panic!("{}", message)
    }

    /// Write and sync a fatal record. See [`FatalEmit`].
    #[track_caller]
    pub fn fatal(&self, args: &[&dyn Display]) -> FatalEmit {
        self.emit_fatal(template::join_args(args), Location::caller())
    }

    #[track_caller]
    pub fn fatalf(&self, template: &str, args: &[&dyn Display]) -> FatalEmit {
        self.emit_fatal(template::render(template, args), Location::caller())
    }

    /// Force every level file to stable storage
    pub fn sync(&self) -> Result<()> {
        self.router.sync()
    }
}

/// Load configuration and publish a new global logger.
///
/// On error the previously installed logger, if any, stays in place.
/// Re-initializing while other threads are emitting is unsupported: their
/// in-flight records may still land in the old logger's files.
pub fn initialize(source: impl Into<ConfigSource>) -> Result<()> {
    let config = source.into().load()?;
    let logger = Logger::from_config(&config)?;
    install(logger);
    Ok(())
}

/// Publish an already built logger as the global instance
pub fn install(logger: Logger) {
    let logger = Arc::new(logger);
    *GLOBAL.write() = Some(logger);
}

/// The current global logger, if one was installed
pub fn global() -> Option<Arc<Logger>> {
    GLOBAL.read().clone()
}

fn missing_logger(level: LogLevel) {
    eprintln!(
        "[LOGGER WARNING] {} record emitted before initialize(); record dropped",
        level
    );
}

fn emit_global<F>(level: LogLevel, render: F, caller: &Location<'_>) -> bool
where
    F: FnOnce() -> String,
{
    match global() {
        Some(logger) => logger.emit(level, render, caller),
        None => {
            missing_logger(level);
            false
        }
    }
}

/// Emit a prepared message through the global logger
#[track_caller]
pub fn log(level: LogLevel, message: impl Into<String>) -> bool {
    emit_global(level, || message.into(), Location::caller())
}

#[track_caller]
pub fn trace(args: &[&dyn Display]) {
    emit_global(LogLevel::Debug, || template::join_args(args), Location::caller());
}

#[track_caller]
pub fn tracef(template: &str, args: &[&dyn Display]) {
    emit_global(LogLevel::Debug, || template::render(template, args), Location::caller());
}

#[track_caller]
pub fn debug(args: &[&dyn Display]) {
    emit_global(LogLevel::Debug, || template::join_args(args), Location::caller());
}

#[track_caller]
pub fn debugf(template: &str, args: &[&dyn Display]) {
    emit_global(LogLevel::Debug, || template::render(template, args), Location::caller());
}

#[track_caller]
pub fn info(args: &[&dyn Display]) {
    emit_global(LogLevel::Info, || template::join_args(args), Location::caller());
}

#[track_caller]
pub fn infof(template: &str, args: &[&dyn Display]) {
    emit_global(LogLevel::Info, || template::render(template, args), Location::caller());
}

#[track_caller]
pub fn warn(args: &[&dyn Display]) {
    emit_global(LogLevel::Warn, || template::join_args(args), Location::caller());
}

#[track_caller]
pub fn warnf(template: &str, args: &[&dyn Display]) {
    emit_global(LogLevel::Warn, || template::render(template, args), Location::caller());
}

#[track_caller]
pub fn error(args: &[&dyn Display]) {
    emit_global(LogLevel::Error, || template::join_args(args), Location::caller());
}

#[track_caller]
pub fn errorf(template: &str, args: &[&dyn Display]) {
    emit_global(LogLevel::Error, || template::render(template, args), Location::caller());
}

#[track_caller]
pub fn panic(args: &[&dyn Display]) -> ! {
    let message = template::join_args(args);
    let rendered = message.clone();
    emit_global(LogLevel::Panic, move || rendered, Location::caller());
    panic!("{}", message)
}

#[track_caller]
pub fn panicf(template: &str, args: &[&dyn Display]) -> ! {
    let message = template::render(template, args);
    let rendered = message.clone();
    emit_global(LogLevel::Panic, move || rendered, Location::caller());
    panic!("{}", message)
}

fn fatal_global(message: String, caller: &Location<'_>) -> FatalEmit {
    match global() {
        Some(logger) => logger.emit_fatal(message, caller),
        None => {
            missing_logger(LogLevel::Fatal);
            FatalEmit { message }
        }
    }
}

/// Write a fatal record through the global logger. See [`FatalEmit`].
#[track_caller]
pub fn fatal(args: &[&dyn Display]) -> FatalEmit {
    fatal_global(template::join_args(args), Location::caller())
}

#[track_caller]
pub fn fatalf(template: &str, args: &[&dyn Display]) -> FatalEmit {
    fatal_global(template::render(template, args), Location::caller())
}
