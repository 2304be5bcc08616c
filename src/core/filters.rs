//! The prompt loop that asks for `city, month, day` until one line
//! validates completely.

use std::io::{BufRead, Write};

use crate::core::lookup::{DAYS, MONTHS, key_for_value};
use crate::errors::AppResult;
use crate::models::{City, Selection};

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

pub const FILTER_PROMPT: &str = "Please enter a city (Chicago, New York City, or Washington), \
the month (January through June or ALL), and the day of the week (or All) \
(using commas to separate the values: ";

/// Why a filter line was rejected. One line can fail on several tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterIssue {
    TokenCount,
    City,
    Month,
    Day,
}

impl FilterIssue {
    pub fn message(&self) -> &'static str {
        match self {
            FilterIssue::TokenCount => {
                "Please specify the city, the month (or all), and the day (or all) with commas between them."
            }
            FilterIssue::City => {
                "Please enter a city from the list: Chicago, New York City, Washington"
            }
            FilterIssue::Month => {
                "Please enter a month from January to June (or use a three letter abbreviation or the month number) or specify ALL."
            }
            FilterIssue::Day => {
                "Please enter a day of the week (or use a three letter abbreviation or the day number) or specify ALL."
            }
        }
    }
}

/// Validate one `city, month, day` line.
///
/// The line is split on every comma; anything other than exactly three
/// tokens is rejected outright. Otherwise each token is checked on its own
/// and every failure is reported.
pub fn parse_filter_line(line: &str) -> Result<Selection, Vec<FilterIssue>> {
    let tokens: Vec<&str> = line.split(',').collect();
    let [city, month, day] = tokens.as_slice() else {
        return Err(vec![FilterIssue::TokenCount]);
    };

    let city = City::from_input(city);
    let month = key_for_value(&month.trim().to_lowercase(), MONTHS);
    let day = key_for_value(&day.trim().to_lowercase(), DAYS);

    match (city, month, day) {
        (Some(city), Some(month), Some(day)) => Ok(Selection::new(city, month, day)),
        _ => {
            let mut issues = Vec::new();
            if city.is_none() {
                issues.push(FilterIssue::City);
            }
            if month.is_none() {
                issues.push(FilterIssue::Month);
            }
            if day.is_none() {
                issues.push(FilterIssue::Day);
            }
            Err(issues)
        }
    }
}

/// Greet the user and ask for filters until a line validates.
///
/// Returns `None` when input ends before a valid line was entered.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut crate::ui::Console<R, W>,
) -> AppResult<Option<Selection>> {
    writeln!(console.out(), "{}", GREETING)?;

    loop {
        let Some(line) = console.ask(FILTER_PROMPT)? else {
            tracing::debug!("input closed while asking for filters");
            return Ok(None);
        };

        match parse_filter_line(&line) {
            Ok(selection) => return Ok(Some(selection)),
            Err(issues) => {
                tracing::debug!(?issues, input = %line, "filter line rejected");
                for issue in issues {
                    writeln!(console.out(), "{}", issue.message())?;
                }
            }
        }
    }
}
