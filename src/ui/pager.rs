//! Paginated display of long result tables.

use std::io::{BufRead, Write};

use crate::errors::AppResult;
use crate::ui::Console;
use crate::utils::table::Table;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Print `table` `page_size` rows at a time, asking before every page but
/// the first. Stops as soon as the user answers "no"; never asks after the
/// last page. Returns the number of rows printed.
pub fn show_paged<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &Table,
    page_size: usize,
) -> AppResult<usize> {
    let page_size = page_size.max(1);
    let total = table.len();

    write!(console.out(), "{}", table.render_header())?;

    let mut shown = 0;
    while shown < total {
        let end = (shown + page_size).min(total);
        write!(console.out(), "{}", table.render_rows(shown, end))?;
        shown = end;

        if shown < total && !console.ask_show_more()? {
            break;
        }
    }

    Ok(shown)
}

/// Page through `(label, count)` rows.
pub fn show_counts<R: BufRead, W: Write, L: ToString>(
    console: &mut Console<R, W>,
    label: &str,
    rows: &[(L, usize)],
    page_size: usize,
) -> AppResult<usize> {
    let table = Table::counts(label, "Count", rows);
    show_paged(console, &table, page_size)
}
