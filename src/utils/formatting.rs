//! Formatting utilities used for the report output.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a field of `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

/// Right-align `s` in a field of `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

/// Integral values print without decimals, everything else with two.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Human readable duration, e.g. `3 days, 04:05:06`.
/// Fractions of a second are rounded to the nearest second.
pub fn secs2readable(secs: f64) -> String {
    let total = secs.abs().round() as u64;
    let sign = if secs < 0.0 && total > 0 { "-" } else { "" };

    let days = total / 86_400;
    let hours = (total % 86_400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    match days {
        0 => format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds),
        1 => format!("{}1 day, {:02}:{:02}:{:02}", sign, hours, minutes, seconds),
        d => format!(
            "{}{} days, {:02}:{:02}:{:02}",
            sign, d, hours, minutes, seconds
        ),
    }
}
