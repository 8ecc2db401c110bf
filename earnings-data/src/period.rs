use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Time granularity a chart is drawn for.
///
/// The snake_case key (`year`, `half_year`, `month`) matches the member names
/// of the payload's `graph` object and identifies selector options.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GraphPeriod {
    #[default]
    Year,
    HalfYear,
    Month,
}

impl GraphPeriod {
    /// Payload/selector key, e.g. `"half_year"`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Text shown in the period selector.
    pub fn description(self) -> &'static str {
        match self {
            GraphPeriod::Year => "Last year",
            GraphPeriod::HalfYear => "Last 6 months",
            GraphPeriod::Month => "Last month",
        }
    }

    /// Every period except this one, in declaration order.
    pub fn others(self) -> impl Iterator<Item = GraphPeriod> {
        GraphPeriod::iter().filter(move |period| *period != self)
    }
}
