//! Donation payload as delivered by the data source.
//!
//! Every member defaults when absent: the chart only needs
//! `finance.periods[0].graph`, and a payload missing that path simply
//! produces empty columns. Members of the wrong JSON type fail the parse.

use crate::period::GraphPeriod;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered time-bucket key -> amount. `None` marks a bucket without data.
pub type RawPeriodSeries = IndexMap<String, Option<f64>>;

/// Errors raised while reading a payload.
#[derive(Debug)]
pub enum PayloadError {
    Json(serde_json::Error),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Json(e) => write!(f, "Payload error: {}", e),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(e: serde_json::Error) -> Self {
        PayloadError::Json(e)
    }
}

/// Per-donation-recipient response: finance history and gift statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Donator {
    pub nickname: String,
    pub finance: FinanceData,
    pub gift_settings: GiftSettings,
    pub gift_stats: GiftStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceData {
    pub total: FinanceTotal,
    pub periods: Vec<Period>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceTotal {
    pub sum: f64,
    pub donators_count: u64,
    pub regular_donators_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Period {
    pub earnings: PeriodEarnings,
    pub graph: PeriodEarningsGraph,
}

/// Earnings totals over the three chart periods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodEarnings {
    pub year_sum: f64,
    pub six_month_sum: f64,
    pub last_month_sum: f64,
}

impl PeriodEarnings {
    /// Total matching a chart period.
    pub fn sum_for(&self, period: GraphPeriod) -> f64 {
        match period {
            GraphPeriod::Year => self.year_sum,
            GraphPeriod::HalfYear => self.six_month_sum,
            GraphPeriod::Month => self.last_month_sum,
        }
    }
}

/// Raw chart series, one per period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodEarningsGraph {
    pub year: RawPeriodSeries,
    pub half_year: RawPeriodSeries,
    pub month: RawPeriodSeries,
}

impl PeriodEarningsGraph {
    pub fn series(&self, period: GraphPeriod) -> &RawPeriodSeries {
        match period {
            GraphPeriod::Year => &self.year,
            GraphPeriod::HalfYear => &self.half_year,
            GraphPeriod::Month => &self.month,
        }
    }
}

/// Gift tier thresholds; `None` when a tier is not configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftSettings {
    pub small_gift: Option<f64>,
    pub medium_gift: Option<f64>,
    pub big_gift: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftStats {
    pub small_gift_count: u64,
    pub small_gift_sum: f64,
    pub small_medium_count: u64,
    pub small_medium_sum: f64,
    pub small_big_count: u64,
    pub small_big_sum: f64,
}

impl Donator {
    /// Parse a JSON payload.
    pub fn from_json(text: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The current finance period (the first one), if the payload has any.
    pub fn current_period(&self) -> Option<&Period> {
        self.finance.periods.first()
    }

    pub fn graph(&self) -> Option<&PeriodEarningsGraph> {
        self.current_period().map(|period| &period.graph)
    }

    pub fn earnings(&self) -> Option<&PeriodEarnings> {
        self.current_period().map(|period| &period.earnings)
    }
}
