use std::io::{BufRead, Write};

use crate::config::Config;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::report::{RULE, Section, most_common, write_summary, write_table};
use crate::stats::trips;
use crate::ui::Console;
use crate::ui::pager::show_counts;
use crate::utils::table::Table;

/// Most popular start station, end station and start/end combination.
pub fn station_stats<W: Write>(ds: &Dataset, out: &mut W, cfg: &Config) -> AppResult<()> {
    let section = Section::start(
        out,
        "Calculating The Most Popular Stations and Trip...",
        cfg.show_timing,
    )?;

    let stats = trips::station_stats(ds);
    most_common(out, "start station", stats.start)?;
    most_common(out, "end station", stats.end)?;
    most_common(out, "start and end station pair", stats.route)?;

    section.finish(out)?;
    Ok(())
}

/// Round trips per station with their summary, then the paged start and
/// end station rankings.
pub fn additional_station_stats<R: BufRead, W: Write>(
    ds: &Dataset,
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    let round_trips = trips::round_trips_per_station(ds);

    let out = console.out();
    writeln!(out, "\nShow additional information about the stations...\n")?;

    writeln!(
        out,
        "Trips where the start and end stations were the same (i.e. round trips):"
    )?;
    let table = Table::counts("Station", "Round Trips", &round_trips);
    write_table(out, &table, "No round trips")?;

    writeln!(
        out,
        "\nSummary statistics for when the start and end destinations are the same:"
    )?;
    write_summary(out, trips::round_trip_summary(&round_trips))?;

    writeln!(console.out(), "\nThe most popular start stations:")?;
    let starts = trips::start_station_counts(ds);
    if starts.is_empty() {
        writeln!(console.out(), "No trips")?;
    } else {
        show_counts(console, "Start Station", &starts, cfg.page_size)?;
    }

    writeln!(console.out(), "\nThe most popular end stations:")?;
    let ends = trips::end_station_counts(ds);
    if ends.is_empty() {
        writeln!(console.out(), "No trips")?;
    } else {
        show_counts(console, "End Station", &ends, cfg.page_size)?;
    }

    writeln!(console.out(), "{}", RULE)?;
    Ok(())
}
