//! Wire formats for the record timestamps.
use chrono::{NaiveDate, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current UTC instant, e.g. `2024-06-01T12:00:00Z`.
pub fn now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC date, e.g. `2024-06-01`.
pub fn today() -> String {
    Utc::now().format(DATE_FORMAT).to_string()
}

pub fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}
