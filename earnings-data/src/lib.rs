pub mod columns;
pub mod donator;
pub mod period;

pub use columns::{transform, GraphColumns, GraphColumnsByPeriod};
pub use donator::{Donator, FinanceTotal, PayloadError, PeriodEarnings, RawPeriodSeries};
pub use period::GraphPeriod;
