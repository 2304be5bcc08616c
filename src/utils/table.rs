//! Table rendering utilities for report output.
//!
//! Column widths grow to fit the widest cell (measured in terminal columns),
//! so a table can be rendered in slices (one page at a time) and still line up.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    pub width: usize,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            width: header.width(),
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            width: header.width(),
        }
    }

    fn pad(&self, s: &str) -> String {
        match self.align {
            Align::Left => pad_right(s, self.width),
            Align::Right => pad_left(s, self.width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Label/count table, the shape most reports print.
    pub fn counts<L: ToString>(label: &str, count: &str, rows: &[(L, usize)]) -> Self {
        let mut table = Table::new(vec![Column::left(label), Column::right(count)]);
        for (l, c) in rows {
            table.add_row(vec![l.to_string(), c.to_string()]);
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render_header(&self) -> String {
        let cells: Vec<String> = self.columns.iter().map(|c| c.pad(&c.header)).collect();
        format!("{}\n", cells.join("  ").trim_end())
    }

    /// Render rows `start..end` (clamped to the table length).
    pub fn render_rows(&self, start: usize, end: usize) -> String {
        let end = end.min(self.rows.len());
        let mut out = String::new();

        for row in self.rows.get(start..end).unwrap_or_default() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| col.pad(row.get(i).map(String::as_str).unwrap_or("")))
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }

    pub fn render(&self) -> String {
        let mut out = self.render_header();
        out.push_str(&self.render_rows(0, self.rows.len()));
        out
    }
}
