//! Calendar helpers for trip timestamps: parsing, month and weekday names.

use chrono::{Datelike, NaiveDateTime};

/// Month names indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names indexed by `day - 1`, week starting on Sunday.
const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// 1 = January .. 12 = December. Out of range → "Unknown".
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// 1 = Sunday .. 7 = Saturday. Out of range → "Unknown".
pub fn day_name(day: u32) -> &'static str {
    day.checked_sub(1)
        .and_then(|i| DAY_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Day of week numbered the way the day filter expects it (1 = Sunday).
pub fn weekday_number(ts: &NaiveDateTime) -> u32 {
    ts.weekday().number_from_sunday()
}
