//! Report sections printed for every loaded dataset.
//!
//! Each section reads the dataset and writes plain text; the two
//! "additional" sections with long station/hour lists page through them
//! via the console.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::config::Config;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::stats::Summary;
use crate::ui::Console;
use crate::utils::format_number;
use crate::utils::table::{Column, Table};

/// Closes every section.
pub const RULE: &str = "----------------------------------------";

/// Run every report section in order.
pub fn run_all<R: BufRead, W: Write>(
    ds: &Dataset,
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    time::time_stats(ds, console.out(), cfg)?;
    station::station_stats(ds, console.out(), cfg)?;
    duration::trip_duration_stats(ds, console.out(), cfg)?;
    user::user_stats(ds, console.out(), cfg)?;

    time::additional_time_stats(ds, console, cfg)?;
    station::additional_station_stats(ds, console, cfg)?;
    duration::additional_trip_duration_stats(ds, console.out(), cfg)?;
    user::additional_user_stats(ds, console.out())?;
    Ok(())
}

/// Heading, optional timing line and closing rule of a section.
pub(crate) struct Section {
    started: Option<Instant>,
}

impl Section {
    pub(crate) fn start<W: Write>(out: &mut W, title: &str, timed: bool) -> io::Result<Self> {
        writeln!(out, "\n{}\n", title)?;
        Ok(Self {
            started: timed.then(Instant::now),
        })
    }

    pub(crate) fn finish<W: Write>(self, out: &mut W) -> io::Result<()> {
        if let Some(started) = self.started {
            writeln!(
                out,
                "\nThis took {} seconds.",
                started.elapsed().as_secs_f64()
            )?;
        }
        writeln!(out, "{}", RULE)
    }
}

pub(crate) fn most_common<W: Write, T: Display>(
    out: &mut W,
    what: &str,
    value: Option<T>,
) -> io::Result<()> {
    match value {
        Some(v) => writeln!(out, "The most common {} is {}", what, v),
        None => writeln!(out, "The most common {}: no data available", what),
    }
}

pub(crate) fn write_table<W: Write>(out: &mut W, table: &Table, empty: &str) -> io::Result<()> {
    if table.is_empty() {
        writeln!(out, "{}", empty)
    } else {
        write!(out, "{}", table.render())
    }
}

pub(crate) fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new(vec![Column::left("Statistic"), Column::right("Value")]);
    for (label, value) in summary.rows() {
        let cell = value.map(format_number).unwrap_or_else(|| "n/a".to_string());
        table.add_row(vec![label.to_string(), cell]);
    }
    table
}

pub(crate) fn write_summary<W: Write>(out: &mut W, summary: Option<Summary>) -> io::Result<()> {
    match summary {
        Some(s) => write!(out, "{}", summary_table(&s).render()),
        None => writeln!(out, "No data available"),
    }
}

/// Flatten grouped counts into a three column table; the group label is
/// printed on the first row of its group only.
pub(crate) fn grouped_counts_table<G: Display, K: Display>(
    group_header: &str,
    value_header: &str,
    groups: &[(G, Vec<(K, usize)>)],
) -> Table {
    let mut table = Table::new(vec![
        Column::left(group_header),
        Column::left(value_header),
        Column::right("Count"),
    ]);
    for (group, counts) in groups {
        for (i, (value, n)) in counts.iter().enumerate() {
            let label = if i == 0 { group.to_string() } else { String::new() };
            table.add_row(vec![label, value.to_string(), n.to_string()]);
        }
    }
    table
}
