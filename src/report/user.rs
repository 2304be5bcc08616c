use std::io::Write;

use crate::config::Config;
use crate::data::Dataset;
use crate::errors::AppResult;
use crate::report::{RULE, Section, grouped_counts_table, write_table};
use crate::stats::trips;
use crate::utils::table::Table;

/// Counts per user type, per gender (when the column exists) and birth
/// year extremes (when the column exists).
pub fn user_stats<W: Write>(ds: &Dataset, out: &mut W, cfg: &Config) -> AppResult<()> {
    let section = Section::start(out, "Calculating User Stats...", cfg.show_timing)?;

    writeln!(out, "User types:")?;
    let types = Table::counts("User Type", "Count", &trips::user_type_counts(ds));
    write_table(out, &types, "No user type data available")?;
    writeln!(out)?;

    if let Some(genders) = trips::gender_counts(ds) {
        writeln!(out, "Genders:")?;
        let table = Table::counts("Gender", "Count", &genders);
        write_table(out, &table, "No gender data available")?;
        writeln!(out)?;
    }

    if ds.has_birth_year {
        writeln!(out, "Birth Years:")?;
        match trips::birth_year_stats(ds) {
            Some(years) => {
                writeln!(out, "Earliest = {}", years.earliest)?;
                writeln!(out, "Latest = {}", years.latest)?;
                writeln!(out, "Most Common = {}", years.most_common)?;
            }
            None => writeln!(out, "No birth year data available")?,
        }
    }

    section.finish(out)?;
    Ok(())
}

/// User type counts per month and per day of week.
pub fn additional_user_stats<W: Write>(ds: &Dataset, out: &mut W) -> AppResult<()> {
    writeln!(out, "\nShowing additional User Stats...\n")?;

    writeln!(out, "The user types and counts by month:")?;
    let per_month = grouped_counts_table("Month", "User Type", &trips::user_types_per_month(ds));
    write_table(out, &per_month, "No user type data available")?;

    writeln!(
        out,
        "\nThe user types and counts by day of week using the day name:"
    )?;
    let per_day = grouped_counts_table("Day", "User Type", &trips::user_types_per_day(ds));
    write_table(out, &per_day, "No user type data available")?;

    writeln!(out, "{}", RULE)?;
    Ok(())
}
