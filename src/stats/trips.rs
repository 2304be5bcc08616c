//! Trip-level statistics behind each report section.

use crate::data::Dataset;
use crate::stats::counts::{
    grouped_mean, grouped_value_counts, mode, sorted_counts, value_counts,
};
use crate::stats::describe::{Summary, describe};
use crate::utils::date::{day_name, month_name};

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Option<&'static str>,
    pub day: Option<&'static str>,
    pub hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationStats<'a> {
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    pub route: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: i32,
}

pub fn time_stats(ds: &Dataset) -> TimeStats {
    TimeStats {
        month: mode(ds.trips.iter().map(|t| t.month_name)),
        day: mode(ds.trips.iter().map(|t| t.day_name)),
        hour: mode(ds.trips.iter().map(|t| t.start_hour)),
    }
}

pub fn station_stats(ds: &Dataset) -> StationStats<'_> {
    StationStats {
        start: mode(ds.trips.iter().map(|t| t.start_station.as_str())),
        end: mode(ds.trips.iter().map(|t| t.end_station.as_str())),
        route: mode(ds.trips.iter().map(|t| t.route_label())),
    }
}

pub fn duration_stats(ds: &Dataset) -> DurationStats {
    let total: f64 = ds.trips.iter().map(|t| t.duration).sum();
    let mean = (!ds.is_empty()).then(|| total / ds.len() as f64);
    DurationStats { total, mean }
}

/// Blank user types are not counted.
pub fn user_type_counts(ds: &Dataset) -> Vec<(&str, usize)> {
    value_counts(ds.trips.iter().filter_map(|t| t.user_type.as_deref()))
}

/// `None` when the source has no Gender column. Blank genders are not counted.
pub fn gender_counts(ds: &Dataset) -> Option<Vec<(&str, usize)>> {
    ds.has_gender
        .then(|| value_counts(ds.trips.iter().filter_map(|t| t.gender.as_deref())))
}

/// `None` when the source has no Birth Year column or no row has a year.
pub fn birth_year_stats(ds: &Dataset) -> Option<BirthYearStats> {
    if !ds.has_birth_year {
        return None;
    }

    let years: Vec<i32> = ds.trips.iter().filter_map(|t| t.birth_year).collect();
    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        latest: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

/// Trips per month name, most trips first.
pub fn trips_per_month(ds: &Dataset) -> Vec<(&'static str, usize)> {
    value_counts(ds.trips.iter().map(|t| t.month_name))
}

/// Trips per month number (ascending), with the month name.
pub fn trips_per_month_number(ds: &Dataset) -> Vec<(u32, &'static str, usize)> {
    sorted_counts(ds.trips.iter().map(|t| t.month))
        .into_iter()
        .map(|(m, n)| (m, month_name(m), n))
        .collect()
}

/// Trips per day name, most trips first.
pub fn trips_per_day(ds: &Dataset) -> Vec<(&'static str, usize)> {
    value_counts(ds.trips.iter().map(|t| t.day_name))
}

/// Trips per start hour, ascending by hour.
pub fn trips_per_hour(ds: &Dataset) -> Vec<(u32, usize)> {
    sorted_counts(ds.trips.iter().map(|t| t.start_hour))
}

/// Round trips (start station == end station) per station, most first.
pub fn round_trips_per_station(ds: &Dataset) -> Vec<(&str, usize)> {
    value_counts(
        ds.trips
            .iter()
            .filter(|t| t.is_round_trip())
            .map(|t| t.start_station.as_str()),
    )
}

/// Summary statistics over the per-station round trip counts.
pub fn round_trip_summary(per_station: &[(&str, usize)]) -> Option<Summary> {
    let counts: Vec<f64> = per_station.iter().map(|(_, n)| *n as f64).collect();
    describe(&counts)
}

pub fn start_station_counts(ds: &Dataset) -> Vec<(&str, usize)> {
    value_counts(ds.trips.iter().map(|t| t.start_station.as_str()))
}

pub fn end_station_counts(ds: &Dataset) -> Vec<(&str, usize)> {
    value_counts(ds.trips.iter().map(|t| t.end_station.as_str()))
}

pub fn duration_summary(ds: &Dataset) -> Option<Summary> {
    let durations: Vec<f64> = ds.trips.iter().map(|t| t.duration).collect();
    describe(&durations)
}

/// Mean duration per month number, ascending.
pub fn mean_duration_per_month(ds: &Dataset) -> Vec<(u32, f64)> {
    grouped_mean(ds.trips.iter().map(|t| (t.month, t.duration)))
}

/// Mean duration per day of week, Sunday first.
pub fn mean_duration_per_day(ds: &Dataset) -> Vec<(&'static str, f64)> {
    grouped_mean(ds.trips.iter().map(|t| (t.weekday, t.duration)))
        .into_iter()
        .map(|(d, mean)| (day_name(d), mean))
        .collect()
}

/// User type counts inside each month number.
pub fn user_types_per_month(ds: &Dataset) -> Vec<(u32, Vec<(&str, usize)>)> {
    grouped_value_counts(
        ds.trips
            .iter()
            .filter_map(|t| t.user_type.as_deref().map(|u| (t.month, u))),
    )
}

/// User type counts inside each day of week, Sunday first.
pub fn user_types_per_day(ds: &Dataset) -> Vec<(&'static str, Vec<(&str, usize)>)> {
    grouped_value_counts(
        ds.trips
            .iter()
            .filter_map(|t| t.user_type.as_deref().map(|u| (t.weekday, u))),
    )
    .into_iter()
    .map(|(d, counts)| (day_name(d), counts))
    .collect()
}
