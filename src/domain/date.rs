//! Calendar-date helpers
//!
//! Entry dates are plain `YYYY-MM-DD` strings so that lexicographic order
//! equals chronological order everywhere they are compared.

use chrono::{Duration, Local, NaiveDate};

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the local timezone, as `YYYY-MM-DD`.
pub fn current_date() -> String {
    format_date(Local::now().date_naive())
}

/// Today plus `offset` days, as `YYYY-MM-DD`.
pub fn date_with_offset(offset: i64) -> String {
    format_date(Local::now().date_naive() + Duration::days(offset))
}

/// Long human-readable form of a stored date string, e.g.
/// "Monday, January 5, 2024". Falls back to the raw string if it does not
/// parse as `YYYY-MM-DD`.
pub fn format_date_long(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
