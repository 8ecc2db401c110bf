//! RSX components of the donation earnings chart.

mod chart_header;
mod graph;
mod interactive_chart;
mod loading_spinner;
mod period_select;

pub use chart_header::ChartHeader;
pub use graph::Graph;
pub use interactive_chart::InteractiveChart;
pub use loading_spinner::LoadingSpinner;
pub use period_select::PeriodSelect;
