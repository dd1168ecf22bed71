//! Local calendar-date keys.
//!
//! Hearing dates travel as `YYYY-MM-DD` strings and must map to the same
//! (year, month, day) triple on every host, whatever its UTC offset. Parsing
//! goes through `NaiveDate`, a timezone-free type, and the key string is
//! rebuilt from the date's own components. Nothing here touches `DateTime`
//! or UTC.

use chrono::{Local, NaiveDate};

/// Format of a local date key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string as a local calendar date.
///
/// Returns `None` for anything that is not a real calendar date, including
/// out-of-range components like `"2025-13-45"`. Callers indexing feed data
/// skip `None` silently; callers parsing operator input turn it into an
/// error.
pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT).ok()
}

/// Render a date back to its `YYYY-MM-DD` key, from its own components.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Today by the local wall clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
