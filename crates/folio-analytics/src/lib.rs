//! # Folio Analytics
//!
//! Dashboard analytics for portfolio snapshots.
//!
//! This crate turns raw per-record data from an external store into
//! derived dashboard metrics. Three independent analyzers operate over
//! disjoint collections; none depends on another's output:
//!
//! - [`aggregate_allocations`] - sector and market-cap allocation
//!   breakdowns as label-keyed mappings
//! - [`analyze_performance`] - validated timeline plus rolling 1m/3m/1y
//!   returns for the portfolio and two benchmark series, using
//!   closest-prior-date lookup
//! - [`summarize_holdings`] - aggregate value/invested/gain figures,
//!   top and worst performer, diversification score
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every analyzer is a synchronous function of its
//!   inputs with no I/O, no shared state, and no system-clock reads (the
//!   performance reference date comes from the data itself)
//! - **Best-effort validation**: malformed records are dropped and
//!   counted, never turned into per-record errors
//! - **Typed failures**: empty-after-validation is [`AnalyticsError::NoData`],
//!   degenerate data is [`AnalyticsError::InvalidInput`], and anything
//!   unanticipated is contained as [`AnalyticsError::Internal`]
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_analytics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![Holding {
//!     symbol: Some("TCS".to_string()),
//!     company_name: Some("Tata Consultancy Services".to_string()),
//!     quantity: Some(10),
//!     avg_price: Some(dec!(3200)),
//!     value: Some(dec!(35000)),
//!     gain_loss_pct: Some(dec!(0.09)),
//!     sector: Some("IT".to_string()),
//!     ..Default::default()
//! }];
//!
//! let summary = summarize_holdings(&holdings)?;
//! assert_eq!(summary.total_invested, dec!(32000));
//! # Ok::<(), folio_analytics::AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod allocation;
pub mod error;
pub mod performance;
pub mod summary;
pub mod validation;

// Re-export error types at crate root
pub use error::{AnalyticsError, AnalyticsResult};

// Re-export analyzer entry points and result types
pub use allocation::{aggregate_allocations, AllocationBreakdown, AllocationEntry};
pub use performance::{
    analyze_performance, PerformanceReport, PeriodReturns, RollingReturns, TimelinePoint,
};
pub use summary::{summarize_holdings, PerformerHighlight, PortfolioSummary};
pub use validation::{filter_valid, Validated};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use folio_analytics::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Analyzers
    pub use crate::allocation::{aggregate_allocations, AllocationBreakdown, AllocationEntry};
    pub use crate::performance::{
        analyze_performance, PerformanceReport, PeriodReturns, RollingReturns, TimelinePoint,
    };
    pub use crate::summary::{summarize_holdings, PerformerHighlight, PortfolioSummary};

    // Validation plumbing
    pub use crate::validation::{filter_valid, Validated};

    // Re-export commonly used types from dependencies
    pub use folio_core::types::{
        AllocationValue, Date, Holding, MarketCapAllocationRecord, PerformanceRecord,
        SectorAllocationRecord,
    };
    pub use rust_decimal::Decimal;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = AnalyticsError::no_data("no valid holdings data");
        assert!(err.to_string().contains("holdings"));
    }
}
