//! Aggregated allocation bucket records.

use super::AllocationValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An allocation bucket keyed by sector label.
///
/// One record summarizes the holdings belonging to a sector. The label is
/// unique per collection as far as the store is concerned; if duplicates
/// slip through, the last record per label is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocationRecord {
    /// Sector label, the natural key.
    pub sector: Option<String>,

    /// Aggregate value of the bucket. May arrive as uncoercible text.
    pub value: Option<AllocationValue>,

    /// Share of the portfolio, already expressed as a percentage (0-100).
    pub percentage: Option<Decimal>,

    /// Number of holdings contributing to the bucket (passthrough, unused).
    pub holdings_count: Option<u32>,
}

/// An allocation bucket keyed by market-cap tier.
///
/// Same shape and semantics as [`SectorAllocationRecord`] with the label
/// being a market-cap tier ("Large Cap", "Mid Cap", ...). The source sheet
/// stores this bucket's value as text, so uncoercible values are common
/// here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapAllocationRecord {
    /// Market-cap tier label, the natural key.
    pub market_cap: Option<String>,

    /// Aggregate value of the bucket. May arrive as uncoercible text.
    pub value: Option<AllocationValue>,

    /// Share of the portfolio, already expressed as a percentage (0-100).
    pub percentage: Option<Decimal>,

    /// Number of holdings contributing to the bucket (passthrough, unused).
    pub holdings_count: Option<u32>,
}
