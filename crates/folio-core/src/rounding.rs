//! Percentage rounding convention shared by all analyzers.

use rust_decimal::Decimal;

/// Number of decimal places reported for every percentage output.
pub const PCT_DECIMALS: u32 = 2;

/// Rounds a percentage to the reporting precision (2 decimal places).
///
/// Uses `round_dp`, which rounds half-to-even.
#[must_use]
pub fn round_pct(value: Decimal) -> Decimal {
    value.round_dp(PCT_DECIMALS)
}
