//! Timestamp rendering
//!
//! Every encoding uses the same layout, `2025-01-08 10:30:45.123`, in local
//! time with millisecond precision.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// strftime layout shared by the text and structured encodings
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format a timestamp with [`TIME_LAYOUT`]
#[must_use]
pub fn format_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIME_LAYOUT).to_string()
}

/// Parse a string produced by [`format_time`]
pub fn parse_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIME_LAYOUT).ok()
}

/// Current local time
pub fn now() -> DateTime<Local> {
    Local::now()
}
