//! Coloured notices printed outside the interactive transcript (stderr).

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} Error: {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}
