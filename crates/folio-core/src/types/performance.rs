//! Historical performance snapshot records.

use super::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A historical snapshot of portfolio and benchmark values on one date.
///
/// The collection is a time series delivered in non-decreasing date order.
/// Dates are not guaranteed unique; on a tie the later record in input
/// order is authoritative. The three `*_return` columns are precomputed by
/// the importer and carried through; the engine derives its own rolling
/// returns and ignores them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    /// Snapshot date.
    pub date: Option<Date>,

    /// Total portfolio value on that date.
    pub portfolio_value: Option<Decimal>,

    /// Nifty 50 benchmark value.
    pub nifty50: Option<Decimal>,

    /// Gold benchmark value.
    pub gold: Option<Decimal>,

    /// Precomputed portfolio return column (passthrough, unused).
    pub portfolio_return: Option<Decimal>,

    /// Precomputed Nifty 50 return column (passthrough, unused).
    pub nifty50_return: Option<Decimal>,

    /// Precomputed gold return column (passthrough, unused).
    pub gold_return: Option<Decimal>,
}

impl PerformanceRecord {
    /// True if all fields the timeline needs are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.date.is_some()
            && self.portfolio_value.is_some()
            && self.nifty50.is_some()
            && self.gold.is_some()
    }
}
