//! The interactive loop: ask for filters, load, report, offer a restart.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::core::filters::get_filters;
use crate::data::load_data;
use crate::errors::AppResult;
use crate::report;
use crate::ui::Console;

pub const RESTART_PROMPT: &str =
    "\nWould you like to restart? Enter yes or no. (Anything other than yes will be considered no.) \n";

/// Run sessions until the user declines to restart or input ends.
/// Returns the number of datasets reported on.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> AppResult<usize> {
    let data_dir = cfg.data_path();
    let mut reports = 0;

    loop {
        let Some(selection) = get_filters(console)? else {
            break;
        };

        writeln!(
            console.out(),
            "You selected the city = {}, the month {}, and the day {}",
            selection.city,
            selection.month_name(),
            selection.day_name()
        )?;

        let dataset = load_data(&data_dir, &selection)?;
        report::run_all(&dataset, console, cfg)?;
        reports += 1;

        if !wants_restart(console.ask(RESTART_PROMPT)?.as_deref()) {
            break;
        }
    }

    tracing::debug!(reports, "session finished");
    Ok(reports)
}

/// Only a (case-insensitive) "yes" restarts; end of input counts as "no".
/// Surrounding blanks are ignored, so " yes " restarts too.
pub fn wants_restart(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes"))
}
