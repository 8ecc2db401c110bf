//! Bar chart with a value axis, a column track and a time axis.

use crate::view::{chart_view, RenderFlags};
use dioxus::prelude::*;
use earnings_data::GraphColumns;
use earnings_scale::AxisLabels;

/// Height of the column track on desktop, width budget on mobile.
const TRACK_SIZE_PX: u32 = 240;

const COLUMN_COLOR: &str = "#6C5CE7";

/// Props for Graph
#[derive(Props, Clone, PartialEq)]
pub struct GraphProps {
    /// Columns of the selected period
    pub columns: GraphColumns,
    /// Value-axis breakpoints, ascending
    pub labels: AxisLabels,
    /// Collapse every column to 0 (restarts the grow transition)
    #[props(default = false)]
    pub is_zeroed: bool,
    #[props(default = false)]
    pub is_mobile: bool,
    #[props(default = false)]
    pub is_month_period: bool,
}

/// Renders one period of earnings as bars.
///
/// Desktop draws vertical bars with the value axis on the left, largest value
/// on top. Mobile flips the chart: bars run left to right under a value axis
/// laid out smallest first.
#[component]
pub fn Graph(props: GraphProps) -> Element {
    let view = chart_view(
        &props.columns,
        &props.labels,
        RenderFlags {
            is_zeroed: props.is_zeroed,
            is_mobile: props.is_mobile,
            is_month_period: props.is_month_period,
        },
    );

    let thickness = if view.dense { 6 } else { 16 };
    let (box_style, value_axis_style, track_style, time_axis_style, column_base) = if view.is_mobile {
        (
            "display: grid; grid-template-columns: 40px 1fr; grid-template-rows: auto 1fr; gap: 8px;".to_string(),
            "grid-column: 2; grid-row: 1; display: flex; justify-content: space-between;".to_string(),
            format!(
                "grid-column: 2; grid-row: 2; display: flex; flex-direction: column; justify-content: space-around; gap: 4px; min-height: {}px;",
                TRACK_SIZE_PX
            ),
            "grid-column: 1; grid-row: 2; display: flex; flex-direction: column; justify-content: space-between;".to_string(),
            format!("height: {}px; border-radius: 0 4px 4px 0;", thickness),
        )
    } else {
        (
            "display: grid; grid-template-columns: 48px 1fr; grid-template-rows: 1fr auto; gap: 8px;".to_string(),
            format!(
                "grid-column: 1; grid-row: 1; display: flex; flex-direction: column; justify-content: space-between; height: {}px;",
                TRACK_SIZE_PX
            ),
            format!(
                "grid-column: 2; grid-row: 1; display: flex; align-items: flex-end; justify-content: space-around; height: {}px;",
                TRACK_SIZE_PX
            ),
            "grid-column: 2; grid-row: 2; display: flex; justify-content: space-around;".to_string(),
            format!("width: {}px; border-radius: 4px 4px 0 0;", thickness),
        )
    };
    let time_axis_style = if view.dense {
        format!("{} justify-content: space-between;", time_axis_style)
    } else {
        time_axis_style
    };

    let columns: Vec<(String, f64)> = view
        .columns
        .iter()
        .map(|column| {
            (
                format!("{} background: {}; {}", column_base, COLUMN_COLOR, column.style()),
                column.value,
            )
        })
        .collect();

    let list_reset = "list-style: none; margin: 0; padding: 0;";
    let label_style = "font-size: 11px; color: #888;";

    rsx! {
        div {
            class: "graph-box",
            style: "{box_style}",
            ul {
                class: "value-axis-labels",
                style: "{list_reset} {value_axis_style}",
                for (index, label) in view.value_labels.iter().enumerate() {
                    li {
                        key: "{index}",
                        style: "{label_style}",
                        "{label}"
                    }
                }
            }
            ul {
                class: "column-values",
                style: "{list_reset} {track_style}",
                for (index, (style, value)) in columns.iter().enumerate() {
                    li {
                        key: "{index}",
                        style: "{style}",
                        title: "{value}",
                        "data-value": "{value}",
                    }
                }
            }
            ul {
                class: if view.dense { "time-axis-labels time-axis-labels-expanded" } else { "time-axis-labels" },
                style: "{list_reset} {time_axis_style}",
                for (index, label) in view.time_labels.iter().enumerate() {
                    li {
                        key: "{index}",
                        style: "{label_style}",
                        "{label}"
                    }
                }
            }
        }
    }
}
