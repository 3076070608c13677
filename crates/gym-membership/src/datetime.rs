use chrono::{NaiveDate, ParseResult};

/// Calendar dates are exchanged as ISO dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Get the current local date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse an ISO calendar date, ignoring surrounding
/// whitespace.
pub fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

/// Get the number of days from one date to another.
/// Negative if the other date is in the past.
pub trait DaysUntil {
    fn days_until(&self, other: &Self) -> i64;
}

impl DaysUntil for NaiveDate {
    fn days_until(&self, other: &Self) -> i64 {
        other.signed_duration_since(*self).num_days()
    }
}
