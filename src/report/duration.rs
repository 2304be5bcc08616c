use std::io::Write;

use crate::config::Config;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::report::{Section, write_summary, write_table};
use crate::stats::trips;
use crate::utils::table::{Column, Table};
use crate::utils::{format_number, secs2readable};

/// Total and mean trip duration.
pub fn trip_duration_stats<W: Write>(ds: &Dataset, out: &mut W, cfg: &Config) -> AppResult<()> {
    let section = Section::start(out, "Calculating Trip Duration...", cfg.show_timing)?;

    let stats = trips::duration_stats(ds);
    writeln!(
        out,
        "The total travel time is {} seconds ({})",
        format_number(stats.total),
        secs2readable(stats.total)
    )?;
    match stats.mean {
        Some(mean) => writeln!(
            out,
            "The mean travel time is {} seconds ({})",
            format_number(mean),
            secs2readable(mean)
        )?,
        None => writeln!(out, "The mean travel time: no data available")?,
    }

    section.finish(out)?;
    Ok(())
}

/// Duration summary plus the mean per month and per day of week.
pub fn additional_trip_duration_stats<W: Write>(
    ds: &Dataset,
    out: &mut W,
    cfg: &Config,
) -> AppResult<()> {
    let section = Section::start(
        out,
        "Show the trip duration summary statistics...",
        cfg.show_timing,
    )?;

    writeln!(out, "Summary statistics for the trip duration:")?;
    write_summary(out, trips::duration_summary(ds))?;

    writeln!(out, "\nMean trip duration per month:")?;
    let mut per_month = Table::new(vec![Column::right("Month"), Column::right("Mean")]);
    for (month, mean) in trips::mean_duration_per_month(ds) {
        per_month.add_row(vec![month.to_string(), format_number(mean)]);
    }
    write_table(out, &per_month, "No trips")?;

    writeln!(out, "\nMean trip duration per day of week:")?;
    let mut per_day = Table::new(vec![Column::left("Day"), Column::right("Mean")]);
    for (day, mean) in trips::mean_duration_per_day(ds) {
        per_day.add_row(vec![day.to_string(), format_number(mean)]);
    }
    write_table(out, &per_day, "No trips")?;

    section.finish(out)?;
    Ok(())
}
