//! Logger configuration and its file loader
//!
//! A configuration file is a JSON or TOML document with a `log` section:
//!
//! ```toml
//! [log]
//! level = "info"
//! prefix = "billing"
//! format = "json"
//! director = "logs"
//! encode-level = "lowercase"
//! stacktrace-key = "stacktrace"
//! show-line = true
//! log-in-console = false
//! retention-day = 30
//! custom-level-encoder = false
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path reported for documents parsed from a string
const INLINE_ORIGIN: &str = "<inline>";

/// Serialization used for every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputEncoding {
    /// Tab-separated human-readable line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputEncoding {
    /// Unknown names fall back to [`OutputEncoding::Text`]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "structured" => OutputEncoding::Json,
            _ => OutputEncoding::Text,
        }
    }
}

/// Named level rendering styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelStyle {
    Lowercase,
    #[default]
    Capital,
    LowercaseColor,
    CapitalColor,
}

impl LevelStyle {
    /// Unknown names fall back to [`LevelStyle::Capital`]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim() {
            "lowercase" | "lower" => LevelStyle::Lowercase,
            "capital" | "upper" => LevelStyle::Capital,
            "lowercaseColor" | "lower-color" => LevelStyle::LowercaseColor,
            "capitalColor" | "upper-color" => LevelStyle::CapitalColor,
            _ => LevelStyle::Capital,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LogConfiguration {
    /// Minimum level let through to the router; empty disables filtering
    pub level: String,
    /// Logger name written under the `logger` key
    pub prefix: String,
    /// `text` or `json`
    pub format: String,
    /// Directory holding the per-level files
    #[serde(alias = "directory")]
    pub director: PathBuf,
    pub encode_level: String,
    /// Key of the stack trace field; empty omits stack traces
    pub stacktrace_key: String,
    pub show_line: bool,
    pub log_in_console: bool,
    /// Advisory only. Old files are never removed by this crate.
    pub retention_day: u32,
    /// Render levels as `[LEVEL]`, overriding `encode_level`
    pub custom_level_encoder: bool,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            level: String::new(),
            prefix: String::new(),
            format: "text".to_string(),
            director: PathBuf::new(),
            encode_level: "capital".to_string(),
            stacktrace_key: "stacktrace".to_string(),
            show_line: true,
            log_in_console: false,
            retention_day: 0,
            custom_level_encoder: false,
        }
    }
}

#[derive(Deserialize)]
struct ConfigDocument {
    log: LogConfiguration,
}

impl LogConfiguration {
    pub fn new(director: impl Into<PathBuf>) -> Self {
        Self {
            director: director.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_encode_level(mut self, style: impl Into<String>) -> Self {
        self.encode_level = style.into();
        self
    }

    #[must_use]
    pub fn with_custom_level_encoder(mut self, enabled: bool) -> Self {
        self.custom_level_encoder = enabled;
        self
    }

    #[must_use]
    pub fn with_stacktrace_key(mut self, key: impl Into<String>) -> Self {
        self.stacktrace_key = key.into();
        self
    }

    #[must_use]
    pub fn with_show_line(mut self, enabled: bool) -> Self {
        self.show_line = enabled;
        self
    }

    #[must_use]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.log_in_console = enabled;
        self
    }

    pub fn encoding(&self) -> OutputEncoding {
        OutputEncoding::parse_lenient(&self.format)
    }

    pub fn level_style(&self) -> LevelStyle {
        LevelStyle::parse_lenient(&self.encode_level)
    }

    /// Threshold pre-filter, `None` when `level` is empty
    pub fn threshold(&self) -> Result<Option<LogLevel>> {
        if self.level.trim().is_empty() {
            return Ok(None);
        }
        self.level
            .parse::<LogLevel>()
            .map(Some)
            .map_err(|e| LoggerError::config("level", e))
    }

    /// Reject configurations the logger cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.director.as_os_str().is_empty() {
            return Err(LoggerError::config("director", "log directory must not be empty"));
        }
        self.threshold()?;
        Ok(())
    }

    /// Parse a JSON document with a `log` section
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::parse_json(s, Path::new(INLINE_ORIGIN))
    }

    /// Parse a TOML document with a `[log]` table
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Self::parse_toml(s, Path::new(INLINE_ORIGIN))
    }

    /// Load a `.json` or `.toml` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| LoggerError::config_read(path, e))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::parse_toml(&contents, path),
            Some("json") => Self::parse_json(&contents, path),
            other => Err(LoggerError::config_parse(
                path,
                format!("unsupported config format {:?}", other.unwrap_or("")),
            )),
        }
    }

    fn parse_json(s: &str, origin: &Path) -> Result<Self> {
        let doc: ConfigDocument =
            serde_json::from_str(s).map_err(|e| LoggerError::config_parse(origin, e.to_string()))?;
        doc.log.validate()?;
        Ok(doc.log)
    }

    fn parse_toml(s: &str, origin: &Path) -> Result<Self> {
        let doc: ConfigDocument =
            toml::from_str(s).map_err(|e| LoggerError::config_parse(origin, e.to_string()))?;
        doc.log.validate()?;
        Ok(doc.log)
    }
}

/// Where `initialize` gets its configuration from
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Config(LogConfiguration),
}

impl ConfigSource {
    pub fn load(self) -> Result<LogConfiguration> {
        match self {
            ConfigSource::File(path) => LogConfiguration::from_file(path),
            ConfigSource::Config(config) => {
                config.validate()?;
                Ok(config)
            }
        }
    }
}

impl From<&str> for ConfigSource {
    fn from(path: &str) -> Self {
        ConfigSource::File(PathBuf::from(path))
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::File(path.to_path_buf())
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

impl From<LogConfiguration> for ConfigSource {
    fn from(config: LogConfiguration) -> Self {
        ConfigSource::Config(config)
    }
}
