use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::utils::date;

/// One CSV row as found on disk. Every value is kept as text so the loader
/// can report the offending row when parsing fails.
#[derive(Debug, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<String>,
}

/// A parsed trip with its derived calendar fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds.
    pub duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub month_name: &'static str,
    pub weekday: u32,
    pub day_name: &'static str,
    pub start_hour: u32,
}

impl Trip {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        duration: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<i32>,
    ) -> Self {
        let month = chrono::Datelike::month(&start_time);
        let weekday = date::weekday_number(&start_time);

        Self {
            start_time,
            end_time,
            duration,
            start_station,
            end_station,
            user_type: non_blank(user_type),
            gender: non_blank(gender),
            birth_year,
            month,
            month_name: date::month_name(month),
            weekday,
            day_name: date::day_name(weekday),
            start_hour: start_time.hour(),
        }
    }

    pub fn is_round_trip(&self) -> bool {
        self.start_station == self.end_station
    }

    /// Key used for the most common start/end combination.
    pub fn route_label(&self) -> String {
        format!("Start: {}  End: {}", self.start_station, self.end_station)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
