//! View model for the bar chart.
//!
//! `chart_view` turns a period's columns and the current layout flags into
//! exactly what the `Graph` component draws, so the layout rules can be
//! tested without a DOM.

use crate::config::COLUMN_TRANSITION;
use earnings_data::GraphColumns;
use earnings_scale::{calculate_relative_column_length, AxisLabels};
use earnings_utils::labels::format_axis_value;

/// Layout flags taken from the chart state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderFlags {
    pub is_zeroed: bool,
    pub is_mobile: bool,
    pub is_month_period: bool,
}

/// CSS size property carrying a column's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthAxis {
    /// Mobile: bars grow left to right.
    Width,
    /// Desktop: bars grow bottom to top.
    Height,
}

impl LengthAxis {
    pub fn property(self) -> &'static str {
        match self {
            LengthAxis::Width => "width",
            LengthAxis::Height => "height",
        }
    }
}

/// One bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub value: f64,
    /// Fraction of the value axis, `0.0..=1.0`.
    pub length: f64,
    pub axis: LengthAxis,
    pub animated: bool,
}

impl ColumnView {
    /// Inline style, e.g. `height: calc(0.5 * 100%); transition: height 0.5s;`
    pub fn style(&self) -> String {
        let property = self.axis.property();
        let mut style = format!("{}: calc({} * 100%);", property, self.length);
        if self.animated {
            style.push_str(&format!(" transition: {} {};", property, COLUMN_TRANSITION));
        }
        style
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    /// Value-axis labels in display order.
    pub value_labels: Vec<String>,
    pub columns: Vec<ColumnView>,
    pub time_labels: Vec<String>,
    pub is_mobile: bool,
    /// Thin columns and the expanded time-label row of the month view.
    pub dense: bool,
}

/// Build the view of one period.
///
/// Value labels run ascending on mobile (left to right) and descending on
/// desktop (top to bottom). Columns collapse to 0 while zeroed, and only
/// animate when they are not zeroed so the collapse itself is instant.
pub fn chart_view(columns: &GraphColumns, labels: &AxisLabels, flags: RenderFlags) -> ChartView {
    let ordered = if flags.is_mobile {
        labels.ascending().to_vec()
    } else {
        labels.descending()
    };
    let axis = if flags.is_mobile {
        LengthAxis::Width
    } else {
        LengthAxis::Height
    };

    let column_views = columns
        .column_values
        .iter()
        .map(|&value| ColumnView {
            value,
            length: if flags.is_zeroed {
                0.0
            } else {
                calculate_relative_column_length(value, labels)
            },
            axis,
            animated: !flags.is_zeroed,
        })
        .collect();

    ChartView {
        value_labels: ordered.into_iter().map(format_axis_value).collect(),
        columns: column_views,
        time_labels: columns.time_axis_labels.clone(),
        is_mobile: flags.is_mobile,
        dense: flags.is_month_period,
    }
}
