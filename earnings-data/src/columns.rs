//! Reshape raw period series into chart columns.

use crate::donator::{Donator, PeriodEarningsGraph, RawPeriodSeries};
use crate::period::GraphPeriod;
use earnings_utils::labels::{add_leading_zero, truncate_chars};
use serde::Serialize;

/// Month view shows the first day label and then every 5th one.
pub const MONTH_LABEL_STEP: usize = 5;

/// Year and half-year labels are cut to this many characters ("January" -> "Jan").
pub const SHORT_LABEL_LEN: usize = 3;

/// Display-ready data for one period.
///
/// `time_axis_labels` and `column_values` are built independently: month
/// labels are thinned and null buckets produce no column, so the two lists
/// only share relative order, not length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphColumns {
    pub time_axis_labels: Vec<String>,
    pub column_values: Vec<f64>,
    /// Largest column value, 0 when the period has none.
    pub max_value: f64,
}

impl GraphColumns {
    pub fn from_series(period: GraphPeriod, series: &RawPeriodSeries) -> Self {
        transform(period, series.iter().map(|(key, value)| (key.as_str(), *value)))
    }

    pub fn is_empty(&self) -> bool {
        self.time_axis_labels.is_empty() && self.column_values.is_empty()
    }
}

/// Build the columns of `period` from its ordered `(key, value)` entries.
pub fn transform<'a, I>(period: GraphPeriod, entries: I) -> GraphColumns
where
    I: IntoIterator<Item = (&'a str, Option<f64>)>,
{
    let mut columns = GraphColumns::default();

    for (index, (key, value)) in entries.into_iter().enumerate() {
        if let Some(label) = time_axis_label(period, index, key) {
            columns.time_axis_labels.push(label);
        }
        if let Some(value) = value {
            columns.column_values.push(value);
            columns.max_value = columns.max_value.max(value);
        }
    }

    columns
}

fn time_axis_label(period: GraphPeriod, index: usize, key: &str) -> Option<String> {
    match period {
        GraphPeriod::Month => {
            let shown = index == 0 || (index + 1) % MONTH_LABEL_STEP == 0;
            shown.then(|| match key.trim().parse::<i64>() {
                Ok(day) => add_leading_zero(day),
                Err(_) => key.to_string(),
            })
        }
        GraphPeriod::Year | GraphPeriod::HalfYear => Some(truncate_chars(key, SHORT_LABEL_LEN)),
    }
}

/// Columns for all three periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphColumnsByPeriod {
    pub year: GraphColumns,
    pub half_year: GraphColumns,
    pub month: GraphColumns,
}

impl GraphColumnsByPeriod {
    pub fn from_graph(graph: &PeriodEarningsGraph) -> Self {
        let columns = |period| GraphColumns::from_series(period, graph.series(period));
        Self {
            year: columns(GraphPeriod::Year),
            half_year: columns(GraphPeriod::HalfYear),
            month: columns(GraphPeriod::Month),
        }
    }

    /// Columns of the payload's current finance period.
    /// A payload without `finance.periods[0].graph` yields empty columns.
    pub fn from_donator(donator: &Donator) -> Self {
        match donator.graph() {
            Some(graph) => Self::from_graph(graph),
            None => {
                log::warn!("payload has no finance.periods[0].graph, chart will be empty");
                Self::default()
            }
        }
    }

    pub fn get(&self, period: GraphPeriod) -> &GraphColumns {
        match period {
            GraphPeriod::Year => &self.year,
            GraphPeriod::HalfYear => &self.half_year,
            GraphPeriod::Month => &self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_labels_thinned_and_padded() {
        let keys: Vec<String> = (1..=30).map(|day| day.to_string()).collect();
        let columns = transform(
            GraphPeriod::Month,
            keys.iter().map(|key| (key.as_str(), Some(10.0))),
        );
        assert_eq!(
            columns.time_axis_labels,
            vec!["01", "05", "10", "15", "20", "25", "30"]
        );
        assert_eq!(columns.column_values.len(), 30);
    }

    #[test]
    fn test_month_label_without_number_passes_through() {
        let columns = transform(GraphPeriod::Month, [("first", Some(1.0))]);
        assert_eq!(columns.time_axis_labels, vec!["first"]);
    }

    #[test]
    fn test_nulls_dropped_from_columns() {
        let columns = transform(
            GraphPeriod::Year,
            [("1", Some(100.0)), ("2", None), ("3", Some(50.0))],
        );
        assert_eq!(columns.column_values, vec![100.0, 50.0]);
        // every year label is kept, null or not
        assert_eq!(columns.time_axis_labels.len(), 3);
        assert_eq!(columns.max_value, 100.0);
    }

    #[test]
    fn test_year_labels_truncated() {
        let columns = transform(
            GraphPeriod::HalfYear,
            [("September", Some(1.0)), ("October", None), ("May", Some(2.0))],
        );
        assert_eq!(columns.time_axis_labels, vec!["Sep", "Oct", "May"]);
    }

    #[test]
    fn test_max_value_defaults_to_zero() {
        let columns = transform(GraphPeriod::Month, [("1", None), ("2", None)]);
        assert!(columns.column_values.is_empty());
        assert_eq!(columns.max_value, 0.0);

        let columns = transform(GraphPeriod::Year, std::iter::empty());
        assert!(columns.is_empty());
    }

    #[test]
    fn test_columns_from_fixture() {
        let donator = Donator::from_json(include_str!("../../fixtures/donator.json")).unwrap();
        let by_period = GraphColumnsByPeriod::from_donator(&donator);

        let year = by_period.get(GraphPeriod::Year);
        assert_eq!(year.time_axis_labels.len(), 12);
        assert_eq!(year.column_values.len(), 11);
        assert_eq!(year.time_axis_labels[0], "Nov");
        assert_eq!(year.max_value, 8800.0);

        let month = by_period.get(GraphPeriod::Month);
        assert_eq!(month.time_axis_labels.len(), 7);
        assert_eq!(month.column_values.len(), 25);
        assert_eq!(month.max_value, 4800.0);
    }

    #[test]
    fn test_missing_graph_gives_empty_periods() {
        let donator = Donator::from_json("{}").unwrap();
        let by_period = GraphColumnsByPeriod::from_donator(&donator);
        assert_eq!(by_period, GraphColumnsByPeriod::default());
        assert!(by_period.get(GraphPeriod::Month).is_empty());
    }
}
