//! Axis and tooltip formatting plus the fixed series palette.

use crate::data::format_plain_number;

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;
const TOOLTIP_MAX_FRACTION_DIGITS: usize = 3;

pub const SERIES_PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

pub fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Axis tick label: `1.5M`, `12.3K`, or the plain number below a thousand.
/// Negative values are never compacted.
pub fn compact_number(value: f64) -> String {
    if value >= MILLION {
        format!("{:.1}M", value / MILLION)
    } else if value >= THOUSAND {
        format!("{:.1}K", value / THOUSAND)
    } else {
        format_plain_number(value)
    }
}

/// Tooltip value with `,` thousands separators and up to three decimals.
pub fn format_tooltip(value: f64) -> String {
    if !value.is_finite() {
        return format_plain_number(value);
    }
    let rendered = format!("{:.*}", TOOLTIP_MAX_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let grouped = group_thousands(whole);
    let is_zero = grouped == "0" && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
