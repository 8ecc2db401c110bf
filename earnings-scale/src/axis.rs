use crate::error::AxisError;
use serde::{Deserialize, Serialize};

/// Breakpoints of the default value axis.
pub const DEFAULT_AXIS_LABELS: [f64; 6] = [0.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0];

/// Gap count used by [`AxisScale::Dynamic`] unless configured otherwise.
pub const DEFAULT_DYNAMIC_GAPS: usize = 5;

/// Dynamic gap lengths are rounded up to a multiple of this step.
const DYNAMIC_LABEL_STEP: f64 = 1000.0;

/// Strictly ascending value-axis breakpoints, at least two of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct AxisLabels(Vec<f64>);

impl AxisLabels {
    /// Validate a breakpoint list.
    pub fn new(labels: Vec<f64>) -> Result<Self, AxisError> {
        if labels.len() < 2 {
            return Err(AxisError::TooFewLabels(labels.len()));
        }
        for (index, label) in labels.iter().enumerate() {
            if !label.is_finite() {
                return Err(AxisError::NonFinite { index });
            }
            if index > 0 && labels[index - 1] >= *label {
                return Err(AxisError::NotAscending { index });
            }
        }
        Ok(Self(labels))
    }

    /// Evenly spaced breakpoints `0, gap, 2*gap, ..` covering `max_value`.
    ///
    /// The gap is `max_value / gaps` rounded up to the next thousand, and
    /// never less than one thousand, so an all-zero period still gets a
    /// usable axis.
    pub fn from_max_value(max_value: f64, gaps: usize) -> Self {
        let gaps = gaps.max(1);
        let mut gap = (max_value / gaps as f64 / DYNAMIC_LABEL_STEP).ceil() * DYNAMIC_LABEL_STEP;
        if !(gap.is_finite() && gap > 0.0) {
            gap = DYNAMIC_LABEL_STEP;
        }
        Self((0..=gaps).map(|i| i as f64 * gap).collect())
    }

    /// Breakpoints in ascending order.
    pub fn ascending(&self) -> &[f64] {
        &self.0
    }

    /// Breakpoints from largest to smallest.
    pub fn descending(&self) -> Vec<f64> {
        self.0.iter().rev().copied().collect()
    }

    /// Number of gaps between breakpoints (`len - 1`, always at least 1).
    pub fn gap_count(&self) -> usize {
        self.0.len() - 1
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: construction rejects fewer than two breakpoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self(DEFAULT_AXIS_LABELS.to_vec())
    }
}

impl TryFrom<Vec<f64>> for AxisLabels {
    type Error = AxisError;

    fn try_from(labels: Vec<f64>) -> Result<Self, Self::Error> {
        AxisLabels::new(labels)
    }
}

impl From<AxisLabels> for Vec<f64> {
    fn from(labels: AxisLabels) -> Self {
        labels.0
    }
}

/// How a chart picks its value-axis breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisScale {
    /// The same breakpoints for every period.
    Fixed(AxisLabels),
    /// Evenly spaced breakpoints derived from each period's largest value.
    Dynamic { gaps: usize },
}

impl Default for AxisScale {
    fn default() -> Self {
        AxisScale::Fixed(AxisLabels::default())
    }
}

impl AxisScale {
    /// Breakpoints for a period whose largest column value is `max_value`.
    pub fn labels_for(&self, max_value: f64) -> AxisLabels {
        match self {
            AxisScale::Fixed(labels) => labels.clone(),
            AxisScale::Dynamic { gaps } => {
                let labels = AxisLabels::from_max_value(max_value, *gaps);
                log::debug!(
                    "dynamic axis for max {}: {:?}",
                    max_value,
                    labels.ascending()
                );
                labels
            }
        }
    }
}

/// Find the two adjacent breakpoint indexes that bracket `value`.
///
/// Scans from both ends inward: the left pointer advances while its label is
/// below the value, the right pointer retreats while its label is above it.
/// Whichever side stops first names the bracket. If the pointers cross, the
/// pair they straddle is returned.
///
/// A value sitting exactly on the first label brackets `(0, 1)` and one on
/// the last label brackets `(last - 1, last)`, so both indexes are always
/// valid. Returns `None` when the value lies outside the labels, is NaN, or
/// there are fewer than two labels.
pub fn find_border_indexes(labels: &[f64], value: f64) -> Option<(usize, usize)> {
    let last = labels.len().checked_sub(1)?;
    if last == 0 || value.is_nan() || value < labels[0] || value > labels[last] {
        return None;
    }

    let mut left = 0;
    let mut right = last;

    while left <= right {
        if labels[left] < value {
            left += 1;
        } else if left == 0 {
            return Some((0, 1));
        } else {
            return Some((left - 1, left));
        }

        if labels[right] > value {
            right -= 1;
        } else if right == last {
            return Some((last - 1, last));
        } else {
            return Some((right, right + 1));
        }
    }

    Some((right, left))
}

/// Length of a column holding `value`, as a fraction of the whole value axis.
///
/// Every gap between breakpoints is worth `1 / gap_count` of the track no
/// matter how wide it is numerically; inside its gap the value is
/// interpolated linearly. Values outside the breakpoints, and anything that
/// would come out as NaN, map to `0.0`.
pub fn calculate_relative_column_length(value: f64, labels: &AxisLabels) -> f64 {
    let breakpoints = labels.ascending();
    let Some((left, right)) = find_border_indexes(breakpoints, value) else {
        return 0.0;
    };

    let gaps = labels.gap_count() as f64;
    let base = left as f64 / gaps;
    let span = breakpoints[right] - breakpoints[left];
    let additional = if span > 0.0 {
        (value - breakpoints[left]) / span / gaps
    } else {
        0.0
    };

    let length = base + additional;
    if length.is_finite() {
        length.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn default_labels() -> AxisLabels {
        AxisLabels::default()
    }

    #[test]
    fn test_bracket_between_labels() {
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 1500.0), Some((2, 3)));
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 250.0), Some((0, 1)));
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 7000.0), Some((4, 5)));
    }

    #[test]
    fn test_bracket_on_labels() {
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 0.0), Some((0, 1)));
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 10000.0), Some((4, 5)));
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 500.0), Some((0, 1)));
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 5000.0), Some((4, 5)));
    }

    #[test]
    fn test_bracket_out_of_range() {
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, -1.0), None);
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, 10000.5), None);
        assert_eq!(find_border_indexes(&DEFAULT_AXIS_LABELS, f64::NAN), None);
        assert_eq!(find_border_indexes(&[], 1.0), None);
        assert_eq!(find_border_indexes(&[5.0], 5.0), None);
    }

    #[test]
    fn test_relative_length_between_breakpoints() {
        // bracket (1000, 2000): 2/5 for the full gaps plus half of one gap
        let length = calculate_relative_column_length(1500.0, &default_labels());
        assert!((length - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_relative_length_ends() {
        let labels = default_labels();
        assert_eq!(calculate_relative_column_length(0.0, &labels), 0.0);
        assert!((calculate_relative_column_length(10000.0, &labels) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_relative_length_on_inner_labels() {
        let labels = default_labels();
        for (index, value) in DEFAULT_AXIS_LABELS.iter().enumerate() {
            let expected = index as f64 / 5.0;
            let actual = calculate_relative_column_length(*value, &labels);
            assert!(
                (actual - expected).abs() < EPSILON,
                "label {value}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn test_relative_length_out_of_range_is_zero() {
        let labels = default_labels();
        assert_eq!(calculate_relative_column_length(-50.0, &labels), 0.0);
        assert_eq!(calculate_relative_column_length(25_000.0, &labels), 0.0);
        assert_eq!(calculate_relative_column_length(f64::NAN, &labels), 0.0);
        assert_eq!(calculate_relative_column_length(f64::INFINITY, &labels), 0.0);
    }

    #[test]
    fn test_axis_labels_validation() {
        assert_eq!(AxisLabels::new(vec![0.0]), Err(AxisError::TooFewLabels(1)));
        assert_eq!(
            AxisLabels::new(vec![0.0, 10.0, 10.0]),
            Err(AxisError::NotAscending { index: 2 })
        );
        assert_eq!(
            AxisLabels::new(vec![0.0, f64::NAN]),
            Err(AxisError::NonFinite { index: 1 })
        );
        let labels = AxisLabels::new(vec![0.0, 100.0, 400.0]).unwrap();
        assert_eq!(labels.gap_count(), 2);
        assert_eq!(labels.descending(), vec![400.0, 100.0, 0.0]);
    }

    #[test]
    fn test_axis_labels_serde() {
        let labels: AxisLabels = serde_json::from_str("[0, 50, 100]").unwrap();
        assert_eq!(labels.ascending(), &[0.0, 50.0, 100.0]);
        assert!(serde_json::from_str::<AxisLabels>("[100, 50]").is_err());
    }

    #[test]
    fn test_dynamic_labels() {
        let labels = AxisLabels::from_max_value(12_300.0, 5);
        assert_eq!(
            labels.ascending(),
            &[0.0, 3000.0, 6000.0, 9000.0, 12000.0, 15000.0]
        );

        // All-zero periods still get an ascending axis
        let labels = AxisLabels::from_max_value(0.0, 5);
        assert_eq!(labels.ascending(), &[0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0]);
    }

    #[test]
    fn test_axis_scale_labels_for() {
        let fixed = AxisScale::default();
        assert_eq!(fixed.labels_for(99_999.0), default_labels());

        let dynamic = AxisScale::Dynamic {
            gaps: DEFAULT_DYNAMIC_GAPS,
        };
        assert_eq!(dynamic.labels_for(4_000.0).ascending().last(), Some(&5000.0));
    }

    /// Strictly ascending label lists built from a start point and positive steps.
    fn ascending_labels() -> impl Strategy<Value = AxisLabels> {
        (
            -1_000.0f64..1_000.0,
            prop::collection::vec(1.0f64..5_000.0, 1..8),
        )
            .prop_map(|(start, steps)| {
                let mut labels = vec![start];
                for step in steps {
                    let next = labels[labels.len() - 1] + step;
                    labels.push(next);
                }
                AxisLabels::new(labels).unwrap()
            })
    }

    proptest! {
        #[test]
        fn relative_length_is_monotonic(a in 0.0f64..=10_000.0, b in 0.0f64..=10_000.0) {
            let labels = default_labels();
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_length = calculate_relative_column_length(low, &labels);
            let high_length = calculate_relative_column_length(high, &labels);
            prop_assert!(low_length <= high_length + EPSILON);
        }

        #[test]
        fn relative_length_spans_unit_interval(
            labels in ascending_labels(),
            ratio in 0.0f64..=1.0
        ) {
            let first = labels.ascending()[0];
            let last = labels.ascending()[labels.len() - 1];
            prop_assert!(calculate_relative_column_length(first, &labels).abs() < EPSILON);
            prop_assert!((calculate_relative_column_length(last, &labels) - 1.0).abs() < EPSILON);

            let value = first + (last - first) * ratio;
            let length = calculate_relative_column_length(value, &labels);
            prop_assert!((0.0..=1.0).contains(&length));
        }

        #[test]
        fn relative_length_outside_range_is_zero(
            labels in ascending_labels(),
            offset in 0.001f64..1_000_000.0
        ) {
            let first = labels.ascending()[0];
            let last = labels.ascending()[labels.len() - 1];
            prop_assert_eq!(calculate_relative_column_length(first - offset, &labels), 0.0);
            prop_assert_eq!(calculate_relative_column_length(last + offset, &labels), 0.0);
        }

        #[test]
        fn bracket_contains_value(labels in ascending_labels(), ratio in 0.0f64..=1.0) {
            let breakpoints = labels.ascending();
            let last = breakpoints[breakpoints.len() - 1];
            let value = (breakpoints[0] + (last - breakpoints[0]) * ratio).min(last);
            let (left, right) = find_border_indexes(breakpoints, value).unwrap();
            prop_assert_eq!(right, left + 1);
            prop_assert!(breakpoints[left] <= value && value <= breakpoints[right]);
        }
    }
}
