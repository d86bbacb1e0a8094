//! Sector and market-cap allocation aggregation.
//!
//! Reshapes the store's allocation bucket records into two label-keyed
//! mappings. Records missing a label, value, or percentage are dropped;
//! values that arrive as text are coerced to numbers where possible and
//! passed through as raw text otherwise.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::filter_valid;
use folio_core::types::{
    AllocationValue, MarketCapAllocationRecord, SectorAllocationRecord,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value and percentage share for one allocation bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    /// Aggregate value of the bucket, numeric when coercible.
    pub value: AllocationValue,

    /// Share of the portfolio as a percentage (0-100).
    pub percentage: Decimal,
}

/// Allocation breakdown keyed by sector and by market-cap tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    /// Buckets keyed by sector label.
    pub by_sector: HashMap<String, AllocationEntry>,

    /// Buckets keyed by market-cap tier label.
    pub by_market_cap: HashMap<String, AllocationEntry>,
}

/// Aggregates sector and market-cap allocation records into keyed mappings.
///
/// A record is dropped (silently, with the count logged) when its label is
/// empty or absent, or its value or percentage is absent. On duplicate
/// labels the last record in input order wins.
///
/// # Errors
///
/// Returns [`AnalyticsError::NoData`] if both mappings come out empty.
pub fn aggregate_allocations(
    sectors: &[SectorAllocationRecord],
    market_caps: &[MarketCapAllocationRecord],
) -> AnalyticsResult<AllocationBreakdown> {
    let by_sector = filter_valid("sector allocation", sectors, |record| {
        keyed_entry(
            record.sector.as_deref(),
            record.value.as_ref(),
            record.percentage,
        )
    });

    let by_market_cap = filter_valid("market-cap allocation", market_caps, |record| {
        keyed_entry(
            record.market_cap.as_deref(),
            record.value.as_ref(),
            record.percentage,
        )
    });

    if by_sector.is_empty() && by_market_cap.is_empty() {
        return Err(AnalyticsError::no_data("no allocation data"));
    }

    Ok(AllocationBreakdown {
        by_sector: by_sector.records.into_iter().collect(),
        by_market_cap: by_market_cap.records.into_iter().collect(),
    })
}

/// Validates one allocation record into a `(label, entry)` pair.
///
/// Returns `None` when the label is empty/absent or value/percentage is
/// absent. Raw text values are re-coerced here so a numeric string counts
/// as a number downstream.
fn keyed_entry(
    label: Option<&str>,
    value: Option<&AllocationValue>,
    percentage: Option<Decimal>,
) -> Option<(String, AllocationEntry)> {
    let label = label.filter(|l| !l.is_empty())?;
    let value = value?;
    let percentage = percentage?;

    let value = match value {
        AllocationValue::Number(n) => AllocationValue::Number(*n),
        AllocationValue::Raw(text) => AllocationValue::coerce(text.clone()),
    };

    Some((label.to_string(), AllocationEntry { value, percentage }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sector(label: &str, value: AllocationValue, pct: Decimal) -> SectorAllocationRecord {
        SectorAllocationRecord {
            sector: Some(label.to_string()),
            value: Some(value),
            percentage: Some(pct),
            holdings_count: Some(3),
        }
    }

    fn market_cap(label: &str, value: AllocationValue, pct: Decimal) -> MarketCapAllocationRecord {
        MarketCapAllocationRecord {
            market_cap: Some(label.to_string()),
            value: Some(value),
            percentage: Some(pct),
            holdings_count: Some(3),
        }
    }

    #[test]
    fn test_aggregate_both_collections() {
        let sectors = vec![
            sector("IT", dec!(500000).into(), dec!(40)),
            sector("Banking", dec!(300000).into(), dec!(24)),
        ];
        let caps = vec![market_cap("Large Cap", dec!(700000).into(), dec!(56))];

        let breakdown = aggregate_allocations(&sectors, &caps).unwrap();

        assert_eq!(breakdown.by_sector.len(), 2);
        assert_eq!(breakdown.by_market_cap.len(), 1);
        assert_eq!(
            breakdown.by_sector["IT"].value,
            AllocationValue::Number(dec!(500000))
        );
        assert_eq!(breakdown.by_market_cap["Large Cap"].percentage, dec!(56));
    }

    #[test]
    fn test_invalid_records_dropped() {
        let sectors = vec![
            SectorAllocationRecord::default(),
            sector("", dec!(100).into(), dec!(10)),
            SectorAllocationRecord {
                sector: Some("IT".to_string()),
                value: None,
                percentage: Some(dec!(10)),
                holdings_count: None,
            },
            sector("Pharma", dec!(100000).into(), dec!(8)),
        ];

        let breakdown = aggregate_allocations(&sectors, &[]).unwrap();

        assert_eq!(breakdown.by_sector.len(), 1);
        assert!(breakdown.by_sector.contains_key("Pharma"));
    }

    #[test]
    fn test_empty_and_all_invalid_yield_no_data() {
        assert_eq!(
            aggregate_allocations(&[], &[]),
            Err(AnalyticsError::no_data("no allocation data"))
        );

        let bad_sectors = vec![SectorAllocationRecord::default()];
        let bad_caps = vec![MarketCapAllocationRecord::default()];
        assert!(matches!(
            aggregate_allocations(&bad_sectors, &bad_caps),
            Err(AnalyticsError::NoData { .. })
        ));
    }

    #[test]
    fn test_one_sided_data_is_enough() {
        let caps = vec![market_cap("Mid Cap", dec!(200000).into(), dec!(16))];
        let breakdown = aggregate_allocations(&[], &caps).unwrap();

        assert!(breakdown.by_sector.is_empty());
        assert_eq!(breakdown.by_market_cap.len(), 1);
    }

    #[test]
    fn test_last_write_wins_on_duplicate_label() {
        let sectors = vec![
            sector("IT", dec!(100).into(), dec!(10)),
            sector("IT", dec!(200).into(), dec!(20)),
        ];

        let breakdown = aggregate_allocations(&sectors, &[]).unwrap();

        assert_eq!(breakdown.by_sector.len(), 1);
        let entry = &breakdown.by_sector["IT"];
        assert_eq!(entry.value, AllocationValue::Number(dec!(200)));
        assert_eq!(entry.percentage, dec!(20));
    }

    #[test]
    fn test_text_value_coercion() {
        let caps = vec![
            market_cap("Large Cap", AllocationValue::Raw("123456.75".into()), dec!(60)),
            market_cap("Small Cap", AllocationValue::Raw("N/A".into()), dec!(5)),
        ];

        let breakdown = aggregate_allocations(&[], &caps).unwrap();

        assert_eq!(
            breakdown.by_market_cap["Large Cap"].value,
            AllocationValue::Number(dec!(123456.75))
        );
        assert_eq!(
            breakdown.by_market_cap["Small Cap"].value,
            AllocationValue::Raw("N/A".to_string())
        );
    }
}
