//! Value-axis scaling for the donation earnings bar chart.
//!
//! Donation amounts are heavily skewed: most are small, a few are large. The
//! chart therefore uses a fixed set of non-uniform breakpoints (for example
//! `0, 500, 1000, 2000, 5000, 10000`) and gives every gap between two
//! breakpoints the same share of the column track. Inside a gap the value is
//! interpolated linearly.
//!
//! - [`axis::AxisLabels`]: validated, strictly ascending breakpoints
//! - [`axis::find_border_indexes`]: bracket a value between two breakpoints
//! - [`axis::calculate_relative_column_length`]: map a value onto `[0, 1]`
//! - [`axis::AxisScale`]: fixed breakpoints or breakpoints derived from the data

pub mod axis;
pub mod error;

pub use axis::{
    calculate_relative_column_length, find_border_indexes, AxisLabels, AxisScale,
    DEFAULT_AXIS_LABELS,
};
pub use error::AxisError;
