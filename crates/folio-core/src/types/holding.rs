//! A single security position as delivered by the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holding: one security position with quantity, cost basis, and
/// current valuation.
///
/// Records arrive from an external store that fills them from spreadsheet
/// imports, so every field may be absent. The engine validates presence
/// per analyzer and silently drops records that fail; it never mutates or
/// re-derives fields.
///
/// `value` is the stored current value of the position. It is not required
/// to equal `quantity * current_price`; both are taken at face value.
/// `gain_loss_pct` is a fraction (0.05 = 5%), not an already-scaled
/// percentage. That convention is an input contract, not something the
/// engine verifies or corrects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, the natural key.
    pub symbol: Option<String>,

    /// Company name.
    pub company_name: Option<String>,

    /// Number of units held.
    pub quantity: Option<u64>,

    /// Average purchase price per unit.
    pub avg_price: Option<Decimal>,

    /// Latest market price per unit.
    pub current_price: Option<Decimal>,

    /// Sector label.
    pub sector: Option<String>,

    /// Market-cap bucket label (e.g. "Large Cap").
    pub market_cap: Option<String>,

    /// Exchange the position trades on.
    pub exchange: Option<String>,

    /// Stored current value of the position.
    pub value: Option<Decimal>,

    /// Absolute gain or loss.
    pub gain_loss: Option<Decimal>,

    /// Gain or loss as a fraction of cost (0.05 = 5%).
    pub gain_loss_pct: Option<Decimal>,
}

impl Holding {
    /// Invested amount for this position, `quantity * avg_price`.
    ///
    /// Returns `None` if either field is absent.
    #[must_use]
    pub fn invested(&self) -> Option<Decimal> {
        let quantity = self.quantity?;
        let avg_price = self.avg_price?;
        avg_price.checked_mul(Decimal::from(quantity))
    }
}
