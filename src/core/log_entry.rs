//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp;
use chrono::{DateTime, Local};
use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;

/// Source location of the emitting call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl CallerLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }

    /// Shortened `<parent>/<file>:<line>` form
    pub fn trimmed(&self) -> String {
        let normalized = self.file.replace('\\', "/");
        let mut parts = normalized.rsplitn(3, '/');
        let file = parts.next().unwrap_or_default();
        let short = match parts.next() {
            Some(parent) if !parent.is_empty() => format!("{}/{}", parent, file),
            _ => file.to_string(),
        };
        format!("{}:{}", short, self.line)
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.trimmed())
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub logger_name: Option<String>,
    pub caller: Option<CallerLocation>,
    pub stacktrace: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: timestamp::now(),
            logger_name: None,
            caller: None,
            stacktrace: None,
        }
    }

    pub fn with_caller(mut self, caller: CallerLocation) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_logger_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.logger_name = Some(name.to_string());
        }
        self
    }

    pub fn with_stacktrace(mut self, stacktrace: impl Into<String>) -> Self {
        self.stacktrace = Some(stacktrace.into());
        self
    }

    /// Attach a backtrace of the current thread
    pub fn capture_stacktrace(self) -> Self {
        let trace = Backtrace::force_capture().to_string();
        self.with_stacktrace(trace.trim_end())
    }
}
