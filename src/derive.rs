//! Load-time derived columns.
//!
//! Both functions are pure in the calendar date, so deriving is
//! deterministic and order-independent: two records in the same calendar
//! month always share a `year_month` string, and the string form sorts
//! chronologically.

use chrono::{Datelike, NaiveDate, Weekday};

/// Weekday names in canonical order, locale-independent.
///
/// Aggregations grouped by weekday report only the days present in the
/// view; reindex against this ordering to lay the week out in full.
pub const WEEKDAY_ORDER: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The month bucket of a date, formatted `"YYYY-MM"` (zero-padded,
/// lexicographically sortable).
pub fn year_month(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// The full English weekday name of a date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
