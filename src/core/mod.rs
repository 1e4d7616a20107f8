//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod router;
pub mod sink;
pub mod structured_entry;
pub mod template;
pub mod timestamp;

pub use config::{ConfigSource, LevelStyle, LogConfiguration, OutputEncoding};
pub use error::{LoggerError, Result};
pub use log_entry::{CallerLocation, LogEntry};
pub use log_level::LogLevel;
pub use logger::{FatalEmit, Logger, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use output_format::{Encoder, LevelEncoder};
pub use router::{LevelCore, LevelRouter};
pub use sink::Sink;
pub use structured_entry::StructuredRecord;
pub use timestamp::TIME_LAYOUT;
