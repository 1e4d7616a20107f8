//! Record encoding derived from the configuration
//!
//! Two encodings share one field set:
//! - Text: `2025-01-08 10:30:45.123	INFO	billing	src/main.rs:10	Request processed`
//! - Json: `{"time":"2025-01-08 10:30:45.123","level":"INFO","logger":"billing","caller":"src/main.rs:10","msg":"Request processed"}`

use super::config::{LevelStyle, LogConfiguration, OutputEncoding};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::structured_entry::StructuredRecord;
use super::timestamp;

const FIELD_SEPARATOR: char = '\t';

/// How a level is rendered into the `level` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEncoder {
    Named(LevelStyle),
    /// `[ERROR]`, whatever the named style says
    Bracketed,
}

impl LevelEncoder {
    pub fn from_config(config: &LogConfiguration) -> Self {
        if config.custom_level_encoder {
            LevelEncoder::Bracketed
        } else {
            LevelEncoder::Named(config.level_style())
        }
    }

    pub fn encode(&self, level: LogLevel) -> String {
        match self {
            LevelEncoder::Bracketed => format!("[{}]", level.to_str()),
            LevelEncoder::Named(LevelStyle::Lowercase) => level.name().to_string(),
            LevelEncoder::Named(LevelStyle::Capital) => level.to_str().to_string(),
            LevelEncoder::Named(LevelStyle::LowercaseColor) => colorize(level, level.name()),
            LevelEncoder::Named(LevelStyle::CapitalColor) => colorize(level, level.to_str()),
        }
    }
}

/// Wrap in ANSI color escapes unconditionally, files included
fn colorize(level: LogLevel, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", level.color_code().to_fg_str(), text)
}

/// Escape line breaks and tabs so a text record stays on one line.
/// Backslashes go first so escaped and literal sequences stay distinct.
fn sanitize(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Encoder shared by every level core
#[derive(Debug, Clone)]
pub struct Encoder {
    encoding: OutputEncoding,
    level_encoder: LevelEncoder,
    stacktrace_key: Option<String>,
    show_caller: bool,
}

impl Encoder {
    /// Total over the configuration: unknown names fall back to defaults
    pub fn build(config: &LogConfiguration) -> Self {
        let key = config.stacktrace_key.trim();
        Self {
            encoding: config.encoding(),
            level_encoder: LevelEncoder::from_config(config),
            stacktrace_key: (!key.is_empty()).then(|| key.to_string()),
            show_caller: config.show_line,
        }
    }

    pub fn encoding(&self) -> OutputEncoding {
        self.encoding
    }

    pub fn level_encoder(&self) -> LevelEncoder {
        self.level_encoder
    }

    pub fn stacktrace_key(&self) -> Option<&str> {
        self.stacktrace_key.as_deref()
    }

    /// Render the field set of an entry
    pub fn record(&self, entry: &LogEntry) -> StructuredRecord {
        StructuredRecord {
            time: timestamp::format_time(&entry.timestamp),
            level: self.level_encoder.encode(entry.level),
            logger: entry.logger_name.clone(),
            caller: if self.show_caller {
                entry.caller.as_ref().map(|c| c.trimmed())
            } else {
                None
            },
            msg: entry.message.clone(),
            stacktrace: if self.stacktrace_key.is_some() {
                entry.stacktrace.clone()
            } else {
                None
            },
        }
    }

    /// Encode an entry as one line, without the line terminator
    pub fn encode(&self, entry: &LogEntry) -> String {
        let record = self.record(entry);
        match self.encoding {
            OutputEncoding::Text => Self::encode_text(&record),
            OutputEncoding::Json => record
                .to_json(self.stacktrace_key())
                .unwrap_or_else(|_| Self::encode_text(&record)),
        }
    }

    fn encode_text(record: &StructuredRecord) -> String {
        let mut fields = vec![record.time.clone(), record.level.clone()];
        if let Some(ref logger) = record.logger {
            fields.push(sanitize(logger));
        }
        if let Some(ref caller) = record.caller {
            fields.push(caller.clone());
        }
        fields.push(sanitize(&record.msg));
        if let Some(ref trace) = record.stacktrace {
            fields.push(sanitize(trace));
        }
        fields.join(&FIELD_SEPARATOR.to_string())
    }
}
