//! # Level Partition Logger
//!
//! A process-wide structured logger that writes every record to a file
//! dedicated to its level: `debug.log`, `info.log`, `warn.log`, `error.log`,
//! `panic.log` and `fatal.log` inside one configured directory.
//!
//! ## Features
//!
//! - **Partitioned routing**: a record goes to its own level's file and no other
//! - **Two encodings**: tab-separated text or one JSON object per line
//! - **Thread safe**: concurrent emits never interleave within a file
//! - **Global facade**: initialize once, log from anywhere
//!
//! ```no_run
//! use level_partition_logger::{self as log, LogConfiguration};
//!
//! log::initialize(LogConfiguration::new("logs").with_format("json"))?;
//! log::info(&[&"service started on port", &8080]);
//! log::warnf("cache at {}% capacity", &[&93]);
//! # Ok::<(), level_partition_logger::LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ConfigSource, FatalEmit, LogConfiguration, LogEntry, LogLevel, Logger, LoggerError,
        LoggerMetrics, OutputEncoding, Result,
    };
}

pub use crate::core::logger::{
    debug, debugf, error, errorf, fatal, fatalf, global, info, infof, initialize, install, log,
    panic, panicf, trace, tracef, warn, warnf,
};
pub use crate::core::{
    CallerLocation, ConfigSource, Encoder, FatalEmit, LevelCore, LevelEncoder, LevelRouter,
    LevelStyle, LogConfiguration, LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics,
    OutputEncoding, Result, Sink, StructuredRecord, FATAL_EXIT_CODE, TIME_LAYOUT,
};
pub use sinks::{ConsoleSink, FileSink};
