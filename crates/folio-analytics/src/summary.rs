//! Portfolio-level summary metrics.
//!
//! Aggregates validated holdings into total value/invested/gain figures,
//! picks the top and worst performer by gain fraction, and attaches a
//! diversification score derived from distinct-sector coverage.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::filter_valid;
use folio_core::round_pct;
use folio_core::types::Holding;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Multiplier applied to the distinct-sector count.
const DIVERSIFICATION_FACTOR: Decimal = dec!(1.5);

/// Static risk label attached to every summary.
///
/// A placeholder, not a computed property: callers must not read risk
/// logic into it.
const RISK_LEVEL: &str = "Moderate";

/// Symbol, name, and gain of a highlighted holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerHighlight {
    /// Ticker symbol.
    pub symbol: String,

    /// Company name.
    pub company_name: String,

    /// Gain or loss as a rounded percentage (the stored fraction x 100).
    pub gain_percent: Decimal,
}

/// Aggregate metrics and insights for a set of holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of stored current values.
    pub total_value: Decimal,

    /// Sum of `quantity * avg_price` over valid holdings.
    pub total_invested: Decimal,

    /// `total_value - total_invested`.
    pub total_gain_loss: Decimal,

    /// Gain/loss as a rounded percentage of invested.
    pub total_gain_loss_percent: Decimal,

    /// Holding with the highest gain fraction (first on ties).
    pub top_performer: PerformerHighlight,

    /// Holding with the lowest gain fraction (first on ties).
    pub worst_performer: PerformerHighlight,

    /// Distinct-sector count x 1.5, rounded to 2 decimal places.
    pub diversification_score: Decimal,

    /// Static risk label, always `"Moderate"`.
    pub risk_level: String,
}

/// A holding that passed validation, with all required fields extracted.
struct ValidHolding {
    symbol: String,
    company_name: String,
    invested: Decimal,
    value: Decimal,
    gain_fraction: Decimal,
    sector: String,
}

/// Summarizes a set of holdings.
///
/// A holding is valid only if symbol, company name, quantity, average
/// price, value, gain fraction, and sector are all present; invalid
/// holdings are dropped with the count logged.
///
/// # Errors
///
/// - [`AnalyticsError::NoData`] when no valid holdings remain.
/// - [`AnalyticsError::InvalidInput`] when the total invested amount is
///   zero or negative: data exists but is degenerate, a condition the
///   caller surfaces differently from "no data".
/// - [`AnalyticsError::Internal`] on arithmetic faults (decimal overflow).
pub fn summarize_holdings(holdings: &[Holding]) -> AnalyticsResult<PortfolioSummary> {
    let validated = filter_valid("holdings", holdings, |h| {
        Some(ValidHolding {
            symbol: h.symbol.clone()?,
            company_name: h.company_name.clone()?,
            invested: h.invested()?,
            value: h.value?,
            gain_fraction: h.gain_loss_pct?,
            sector: h.sector.clone()?,
        })
    });

    if validated.is_empty() {
        return Err(AnalyticsError::no_data("no valid holdings data"));
    }
    let valid = validated.records;

    let total_value = checked_sum(valid.iter().map(|h| h.value))?;
    let total_invested = checked_sum(valid.iter().map(|h| h.invested))?;

    if total_invested <= Decimal::ZERO {
        return Err(AnalyticsError::invalid_input(
            "total invested amount is zero or negative",
        ));
    }

    let total_gain_loss = total_value
        .checked_sub(total_invested)
        .ok_or_else(overflow)?;
    let total_gain_loss_percent = total_gain_loss
        .checked_div(total_invested)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_pct)
        .ok_or_else(overflow)?;

    // Stable selection: strict comparisons keep the first occurrence on ties.
    let mut top = &valid[0];
    let mut worst = &valid[0];
    for holding in &valid[1..] {
        if holding.gain_fraction > top.gain_fraction {
            top = holding;
        }
        if holding.gain_fraction < worst.gain_fraction {
            worst = holding;
        }
    }

    let sectors: HashSet<&str> = valid.iter().map(|h| h.sector.as_str()).collect();
    let diversification_score = Decimal::from(sectors.len())
        .checked_mul(DIVERSIFICATION_FACTOR)
        .map(round_pct)
        .ok_or_else(overflow)?;

    Ok(PortfolioSummary {
        total_value,
        total_invested,
        total_gain_loss,
        total_gain_loss_percent,
        top_performer: highlight(top)?,
        worst_performer: highlight(worst)?,
        diversification_score,
        risk_level: RISK_LEVEL.to_string(),
    })
}

/// Builds the reported highlight for a holding.
///
/// The stored gain fraction is scaled to a percentage here; see the input
/// contract on [`Holding::gain_loss_pct`].
fn highlight(holding: &ValidHolding) -> AnalyticsResult<PerformerHighlight> {
    let gain_percent = holding
        .gain_fraction
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(round_pct)
        .ok_or_else(overflow)?;

    Ok(PerformerHighlight {
        symbol: holding.symbol.clone(),
        company_name: holding.company_name.clone(),
        gain_percent,
    })
}

/// Sums decimals, containing overflow as an internal error.
fn checked_sum(values: impl Iterator<Item = Decimal>) -> AnalyticsResult<Decimal> {
    let mut total = Decimal::ZERO;
    for value in values {
        total = total.checked_add(value).ok_or_else(overflow)?;
    }
    Ok(total)
}

fn overflow() -> AnalyticsError {
    AnalyticsError::internal("decimal overflow during aggregation")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(
        symbol: &str,
        quantity: u64,
        avg_price: Decimal,
        value: Decimal,
        gain_fraction: Decimal,
        sector: &str,
    ) -> Holding {
        Holding {
            symbol: Some(symbol.to_string()),
            company_name: Some(format!("{symbol} Ltd")),
            quantity: Some(quantity),
            avg_price: Some(avg_price),
            value: Some(value),
            gain_loss_pct: Some(gain_fraction),
            sector: Some(sector.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_holdings_is_no_data() {
        assert!(matches!(
            summarize_holdings(&[]),
            Err(AnalyticsError::NoData { .. })
        ));
    }

    #[test]
    fn test_all_invalid_is_no_data() {
        let holdings = vec![
            Holding::default(),
            Holding {
                symbol: Some("TCS".to_string()),
                ..Default::default()
            },
        ];
        assert!(matches!(
            summarize_holdings(&holdings),
            Err(AnalyticsError::NoData { .. })
        ));
    }

    #[test]
    fn test_totals_and_gain() {
        let holdings = vec![
            holding("TCS", 10, dec!(100), dec!(1200), dec!(0.20), "IT"),
            holding("HDFC", 20, dec!(50), dec!(900), dec!(-0.10), "Banking"),
        ];

        let summary = summarize_holdings(&holdings).unwrap();

        assert_eq!(summary.total_value, dec!(2100));
        assert_eq!(summary.total_invested, dec!(2000));
        assert_eq!(summary.total_gain_loss, dec!(100));
        assert_eq!(summary.total_gain_loss_percent, dec!(5.00));
        assert_eq!(summary.risk_level, "Moderate");
    }

    #[test]
    fn test_zero_invested_is_invalid_input() {
        // Value exists but cost basis is zero: degenerate, not missing.
        let holdings = vec![holding("FREE", 10, dec!(0), dec!(500), dec!(1.0), "IT")];

        assert_eq!(
            summarize_holdings(&holdings),
            Err(AnalyticsError::invalid_input(
                "total invested amount is zero or negative"
            ))
        );
    }

    #[test]
    fn test_top_and_worst_performers() {
        let holdings = vec![
            holding("MID", 1, dec!(100), dec!(105), dec!(0.05), "IT"),
            holding("BEST", 1, dec!(100), dec!(150), dec!(0.50), "Pharma"),
            holding("WORST", 1, dec!(100), dec!(80), dec!(-0.20), "Banking"),
        ];

        let summary = summarize_holdings(&holdings).unwrap();

        assert_eq!(summary.top_performer.symbol, "BEST");
        assert_eq!(summary.top_performer.gain_percent, dec!(50.00));
        assert_eq!(summary.worst_performer.symbol, "WORST");
        assert_eq!(summary.worst_performer.gain_percent, dec!(-20.00));
    }

    #[test]
    fn test_tie_keeps_first_occurrence() {
        let holdings = vec![
            holding("A", 1, dec!(100), dec!(110), dec!(0.10), "IT"),
            holding("B", 1, dec!(100), dec!(110), dec!(0.10), "IT"),
        ];

        let summary = summarize_holdings(&holdings).unwrap();

        assert_eq!(summary.top_performer.symbol, "A");
        assert_eq!(summary.worst_performer.symbol, "A");
    }

    #[test]
    fn test_single_holding_is_both_top_and_worst() {
        let holdings = vec![holding("ONLY", 5, dec!(200), dec!(1100), dec!(0.10), "IT")];

        let summary = summarize_holdings(&holdings).unwrap();

        assert_eq!(summary.top_performer, summary.worst_performer);
        assert_eq!(summary.top_performer.symbol, "ONLY");
    }

    #[test]
    fn test_diversification_score() {
        let holdings = vec![
            holding("A", 1, dec!(100), dec!(100), dec!(0.0), "IT"),
            holding("B", 1, dec!(100), dec!(100), dec!(0.0), "Banking"),
            holding("C", 1, dec!(100), dec!(100), dec!(0.0), "Pharma"),
            holding("D", 1, dec!(100), dec!(100), dec!(0.0), "IT"),
        ];

        let summary = summarize_holdings(&holdings).unwrap();

        // 3 distinct sectors x 1.5
        assert_eq!(summary.diversification_score, dec!(4.5));
    }

    #[test]
    fn test_invalid_rows_dropped_from_aggregates() {
        let holdings = vec![
            holding("GOOD", 10, dec!(100), dec!(1100), dec!(0.10), "IT"),
            Holding {
                // Missing sector: dropped.
                symbol: Some("BAD".to_string()),
                company_name: Some("Bad Ltd".to_string()),
                quantity: Some(10),
                avg_price: Some(dec!(100)),
                value: Some(dec!(9999)),
                gain_loss_pct: Some(dec!(9.0)),
                ..Default::default()
            },
        ];

        let summary = summarize_holdings(&holdings).unwrap();

        assert_eq!(summary.total_value, dec!(1100));
        assert_eq!(summary.top_performer.symbol, "GOOD");
    }
}
