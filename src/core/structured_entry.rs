//! Field set of a structured record and its JSON line form

use serde::de::Error as _;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const TIME_KEY: &str = "time";
pub const LEVEL_KEY: &str = "level";
pub const LOGGER_KEY: &str = "logger";
pub const CALLER_KEY: &str = "caller";
pub const MESSAGE_KEY: &str = "msg";

/// Rendered fields of one record, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredRecord {
    pub time: String,
    pub level: String,
    pub logger: Option<String>,
    pub caller: Option<String>,
    pub msg: String,
    pub stacktrace: Option<String>,
}

struct KeyedRecord<'a> {
    record: &'a StructuredRecord,
    stacktrace_key: Option<&'a str>,
}

impl Serialize for KeyedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.record;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(TIME_KEY, &record.time)?;
        map.serialize_entry(LEVEL_KEY, &record.level)?;
        if let Some(ref logger) = record.logger {
            map.serialize_entry(LOGGER_KEY, logger)?;
        }
        if let Some(ref caller) = record.caller {
            map.serialize_entry(CALLER_KEY, caller)?;
        }
        map.serialize_entry(MESSAGE_KEY, &record.msg)?;
        if let (Some(key), Some(trace)) = (self.stacktrace_key, record.stacktrace.as_ref()) {
            map.serialize_entry(key, trace)?;
        }
        map.end()
    }
}

impl StructuredRecord {
    /// Serialize as a single JSON line; the stack trace is written under
    /// `stacktrace_key` and left out when the key is `None`
    pub fn to_json(&self, stacktrace_key: Option<&str>) -> Result<String, serde_json::Error> {
        serde_json::to_string(&KeyedRecord {
            record: self,
            stacktrace_key,
        })
    }

    /// Parse a JSON line written by [`StructuredRecord::to_json`]
    pub fn from_json(json: &str, stacktrace_key: Option<&str>) -> Result<Self, serde_json::Error> {
        let value: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let text = |key: &str| -> Option<String> {
            value.get(key).and_then(|v| v.as_str()).map(str::to_string)
        };
        let required = |key: &str| -> Result<String, serde_json::Error> {
            text(key).ok_or_else(|| serde_json::Error::custom(format!("missing field `{}`", key)))
        };

        Ok(Self {
            time: required(TIME_KEY)?,
            level: required(LEVEL_KEY)?,
            logger: text(LOGGER_KEY),
            caller: text(CALLER_KEY),
            msg: required(MESSAGE_KEY)?,
            stacktrace: stacktrace_key.and_then(text),
        })
    }
}
