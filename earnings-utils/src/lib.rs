//! Shared utility functions for the donation earnings chart crates.

pub mod listener;
pub mod throttle;

/// Label formatting helpers
pub mod labels {
    /// Prefix single-digit numbers (1-9) with a zero: `1` -> `"01"`.
    /// Every other number is printed as is.
    pub fn add_leading_zero(number: i64) -> String {
        if (1..=9).contains(&number) {
            format!("0{number}")
        } else {
            number.to_string()
        }
    }

    /// Keep at most the first `count` characters of a label.
    ///
    /// Counts chars, not bytes, so month names in any script are cut safely.
    pub fn truncate_chars(label: &str, count: usize) -> String {
        label.chars().take(count).collect()
    }

    /// Format a value-axis breakpoint for display.
    /// Whole numbers drop the fractional part: `500.0` -> `"500"`.
    pub fn format_axis_value(value: f64) -> String {
        if value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            value.to_string()
        }
    }

}
