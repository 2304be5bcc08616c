//! Reads a city's CSV file into a [`Dataset`] and applies the selection.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::data::Dataset;
use crate::errors::{AppError, AppResult};
use crate::models::trip::RawTrip;
use crate::models::{City, Selection, Trip};
use crate::utils::date::parse_timestamp;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// Load the city's trips and keep the ones matching `selection`.
pub fn load_data(data_dir: &Path, selection: &Selection) -> AppResult<Dataset> {
    let started = Instant::now();
    let all = load_city(data_dir, selection.city)?;
    let total = all.len();

    let filtered = all.filtered(selection.month, selection.day);
    info!(
        city = %selection.city,
        month = selection.month_name(),
        day = selection.day_name(),
        total,
        kept = filtered.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dataset loaded"
    );

    Ok(filtered)
}

/// Load every trip of `city` from `<data_dir>/<city file>`.
pub fn load_city(data_dir: &Path, city: City) -> AppResult<Dataset> {
    let path = data_dir.join(city.file_name());
    debug!(path = %path.display(), "reading trip data");

    let file = File::open(&path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;

    read_trips(file, &path.display().to_string())
}

/// Parse trips from CSV text. `source` names the input in error messages.
pub fn read_trips<R: Read>(reader: R, source: &str) -> AppResult<Dataset> {
    // trimmed headers are what both the column check and serde see
    let mut rdr = ReaderBuilder::new()
        .flexible(false)
        .trim(Trim::Headers)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !has_column(&headers, column) {
            return Err(AppError::MissingColumn {
                file: source.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut dataset = Dataset {
        trips: Vec::new(),
        has_gender: has_column(&headers, GENDER),
        has_birth_year: has_column(&headers, BIRTH_YEAR),
    };

    for record in rdr.records() {
        let record = record?;
        let row = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let raw: RawTrip = record.deserialize(Some(&headers))?;
        dataset.trips.push(parse_trip(raw, row)?);
    }

    debug!(source, rows = dataset.len(), "trip data parsed");
    Ok(dataset)
}

fn has_column(headers: &StringRecord, name: &str) -> bool {
    headers.iter().any(|h| h == name)
}

fn parse_trip(raw: RawTrip, row: usize) -> AppResult<Trip> {
    let start_time =
        parse_timestamp(&raw.start_time).ok_or_else(|| AppError::InvalidTimestamp {
            row,
            value: raw.start_time.clone(),
        })?;
    let end_time = parse_timestamp(&raw.end_time).ok_or_else(|| AppError::InvalidTimestamp {
        row,
        value: raw.end_time.clone(),
    })?;

    let duration = parse_number(&raw.trip_duration, "Trip Duration", row)?;

    // Birth years are stored as floats ("1989.0") with blanks for unknown.
    let birth_year = match raw.birth_year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(v) => Some(parse_number(v, BIRTH_YEAR, row)? as i32),
    };

    Ok(Trip::new(
        start_time,
        end_time,
        duration,
        raw.start_station,
        raw.end_station,
        raw.user_type,
        raw.gender,
        birth_year,
    ))
}

fn parse_number(value: &str, column: &str, row: usize) -> AppResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        })
}
