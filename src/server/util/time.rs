//! Time and date utilities.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

/// Returns the calendar year of the provided timestamp as used in inventory numbers.
///
/// # Arguments
/// - `now` - Current UTC timestamp
///
/// # Returns
/// - `i32` - Four digit calendar year
pub fn inventory_year(now: DateTime<Utc>) -> i32 {
    now.year()
}

/// Parses a timestamp found in a stored catalog description.
///
/// Descriptions are produced by the chat UI and may contain either RFC 3339 timestamps
/// (`2024-05-01T10:00:00Z`, `2024-05-01T10:00:00.123+02:00`) or naive ISO timestamps
/// without offset. Offsets are converted to UTC.
///
/// # Returns
/// - `Some(NaiveDateTime)` - Parsed UTC timestamp
/// - `None` - Empty or unrecognized input
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
