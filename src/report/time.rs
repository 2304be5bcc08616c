use std::io::{BufRead, Write};

use crate::config::Config;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::report::{RULE, Section, most_common, write_table};
use crate::stats::trips;
use crate::ui::Console;
use crate::ui::pager::show_paged;
use crate::utils::table::{Column, Table};

/// Most frequent month, day of week and start hour.
pub fn time_stats<W: Write>(ds: &Dataset, out: &mut W, cfg: &Config) -> AppResult<()> {
    let section = Section::start(
        out,
        "Calculating The Most Frequent Times of Travel...",
        cfg.show_timing,
    )?;

    let stats = trips::time_stats(ds);
    most_common(out, "month", stats.month)?;
    most_common(out, "day of the week", stats.day)?;
    most_common(out, "start hour", stats.hour)?;

    section.finish(out)?;
    Ok(())
}

/// Trip counts per month, day of week and start hour. The hour table is paged.
pub fn additional_time_stats<R: BufRead, W: Write>(
    ds: &Dataset,
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<()> {
    let out = console.out();
    writeln!(out, "\nShow additional day and month information...\n")?;

    writeln!(
        out,
        "Number of trips per month ordered by number of trips descending:"
    )?;
    let per_month = Table::counts("Month", "Trips", &trips::trips_per_month(ds));
    write_table(out, &per_month, "No trips")?;

    writeln!(out, "\nNumber of trips per month ordered by month:")?;
    let mut by_number = Table::new(vec![
        Column::right("No"),
        Column::left("Month"),
        Column::right("Trips"),
    ]);
    for (no, name, n) in trips::trips_per_month_number(ds) {
        by_number.add_row(vec![no.to_string(), name.to_string(), n.to_string()]);
    }
    write_table(out, &by_number, "No trips")?;

    writeln!(
        out,
        "\nNumber of trips per day of week sorted by number of trips descending:"
    )?;
    let per_day = Table::counts("Day", "Trips", &trips::trips_per_day(ds));
    write_table(out, &per_day, "No trips")?;

    writeln!(out, "\nNumber of trips per start hour:")?;
    let per_hour = Table::counts("Hour", "Trips", &trips::trips_per_hour(ds));
    if per_hour.is_empty() {
        writeln!(console.out(), "No trips")?;
    } else {
        show_paged(console, &per_hour, cfg.page_size)?;
    }

    writeln!(console.out(), "{}", RULE)?;
    Ok(())
}
