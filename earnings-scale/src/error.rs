use std::fmt;

/// Reasons a breakpoint list cannot be used as a value axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    /// Fewer than two breakpoints, so there is no gap to interpolate in.
    TooFewLabels(usize),
    /// A breakpoint is NaN or infinite.
    NonFinite { index: usize },
    /// `labels[index]` is not strictly greater than `labels[index - 1]`.
    NotAscending { index: usize },
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::TooFewLabels(len) => {
                write!(f, "Axis error: need at least 2 labels, got {}", len)
            }
            AxisError::NonFinite { index } => {
                write!(f, "Axis error: label {} is not a finite number", index)
            }
            AxisError::NotAscending { index } => {
                write!(f, "Axis error: label {} is not above the previous label", index)
            }
        }
    }
}

impl std::error::Error for AxisError {}
