//! Historical performance timeline and rolling returns.
//!
//! Builds a timeline from validated performance snapshots and computes
//! rolling returns over 30, 90, and 365 day windows for the portfolio and
//! both benchmark series. Snapshots are irregular, so each window resolves
//! its past value by closest-prior-date lookup: the latest record dated on
//! or before the target date, falling back to the earliest record when the
//! whole series postdates the window.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::validation::filter_valid;
use folio_core::round_pct;
use folio_core::types::{Date, PerformanceRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lookback windows in days: one month, three months, one year.
const WINDOW_1M: i64 = 30;
const WINDOW_3M: i64 = 90;
const WINDOW_1Y: i64 = 365;

/// One point on the validated timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// Snapshot date.
    pub date: Date,

    /// Portfolio value.
    pub portfolio: Decimal,

    /// Nifty 50 benchmark value.
    pub nifty50: Decimal,

    /// Gold benchmark value.
    pub gold: Decimal,
}

/// Rolling returns for one value series, per lookback window.
///
/// A window is `None` when its past value is unavailable or zero; that
/// serializes as an explicit `null`, never as 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodReturns {
    /// Return over the trailing 30 days.
    #[serde(rename = "1month")]
    pub one_month: Option<Decimal>,

    /// Return over the trailing 90 days.
    #[serde(rename = "3months")]
    pub three_months: Option<Decimal>,

    /// Return over the trailing 365 days.
    #[serde(rename = "1year")]
    pub one_year: Option<Decimal>,
}

/// Rolling returns for the portfolio and both benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollingReturns {
    /// Portfolio value series.
    pub portfolio: PeriodReturns,

    /// Nifty 50 benchmark series.
    pub nifty50: PeriodReturns,

    /// Gold benchmark series.
    pub gold: PeriodReturns,
}

/// Timeline and rolling returns for a performance history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Validated snapshots in input (ascending date) order.
    pub timeline: Vec<TimelinePoint>,

    /// Rolling returns per series.
    pub returns: RollingReturns,
}

/// Analyzes a performance history ordered by ascending date.
///
/// Records missing any field are dropped (count logged). The reference
/// "now" is the date of the last surviving record, never the system
/// clock, so the computation is deterministic for a given input. The
/// input order is trusted as ascending; the engine does not re-sort.
///
/// # Errors
///
/// Returns [`AnalyticsError::NoData`] if the input is empty or no record
/// survives validation.
pub fn analyze_performance(records: &[PerformanceRecord]) -> AnalyticsResult<PerformanceReport> {
    if records.is_empty() {
        return Err(AnalyticsError::no_data("no historical performance data"));
    }

    let validated = filter_valid("performance history", records, |record| {
        match (
            record.date,
            record.portfolio_value,
            record.nifty50,
            record.gold,
        ) {
            (Some(date), Some(portfolio), Some(nifty50), Some(gold)) => Some(TimelinePoint {
                date,
                portfolio,
                nifty50,
                gold,
            }),
            _ => None,
        }
    });

    if validated.is_empty() {
        return Err(AnalyticsError::no_data(
            "no valid historical performance records",
        ));
    }

    let timeline = validated.records;
    let now = timeline[timeline.len() - 1].date;

    let returns = RollingReturns {
        portfolio: series_returns(&timeline, now, |p| p.portfolio),
        nifty50: series_returns(&timeline, now, |p| p.nifty50),
        gold: series_returns(&timeline, now, |p| p.gold),
    };

    Ok(PerformanceReport { timeline, returns })
}

/// Computes the three window returns for one value series.
fn series_returns(
    timeline: &[TimelinePoint],
    now: Date,
    value_of: impl Fn(&TimelinePoint) -> Decimal + Copy,
) -> PeriodReturns {
    PeriodReturns {
        one_month: window_return(timeline, now, WINDOW_1M, value_of),
        three_months: window_return(timeline, now, WINDOW_3M, value_of),
        one_year: window_return(timeline, now, WINDOW_1Y, value_of),
    }
}

/// Rolling return for one window, or `None` when unavailable.
///
/// `return% = round(((latest - past) / past) * 100, 2)` where `past` is
/// the closest-prior value for `now - window`. A zero past value yields
/// `None`; division by zero cannot occur.
fn window_return(
    timeline: &[TimelinePoint],
    now: Date,
    window_days: i64,
    value_of: impl Fn(&TimelinePoint) -> Decimal,
) -> Option<Decimal> {
    let latest = value_of(timeline.last()?);
    let target = now.sub_days(window_days);
    let past = closest_on_or_before(timeline, target, &value_of)?;

    if past.is_zero() {
        return None;
    }

    let change = latest.checked_sub(past)?.checked_div(past)?;
    Some(round_pct(change.checked_mul(Decimal::ONE_HUNDRED)?))
}

/// Closest-prior-match lookup.
///
/// Scans from the most recent record backwards for the last value dated on
/// or before `target`. Falls back to the earliest record's value when the
/// whole series postdates the target.
fn closest_on_or_before(
    timeline: &[TimelinePoint],
    target: Date,
    value_of: impl Fn(&TimelinePoint) -> Decimal,
) -> Option<Decimal> {
    timeline
        .iter()
        .rev()
        .find(|point| point.date <= target)
        .or_else(|| timeline.first())
        .map(value_of)
}
