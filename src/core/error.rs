//! Error types for the logger system

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// Log directory could not be created
    #[error("Failed to create log directory '{path}': {source}")]
    DirectoryCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Per-level log file could not be opened
    #[error("Failed to open {level} log file '{path}': {source}")]
    SinkOpen {
        path: String,
        level: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn config_read(path: &Path, source: std::io::Error) -> Self {
        LoggerError::ConfigRead {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn config_parse(path: &Path, message: impl Into<String>) -> Self {
        LoggerError::ConfigParse {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a directory creation error
    pub fn directory_creation(path: &Path, source: std::io::Error) -> Self {
        LoggerError::DirectoryCreation {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a sink open error for the given level file
    pub fn sink_open(path: &Path, level: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.display().to_string(),
            level: level.into(),
            source,
        }
    }
}
