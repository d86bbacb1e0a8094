//! # Folio Core
//!
//! Core record types and date handling for the Folio portfolio analytics
//! engine.
//!
//! This crate defines the immutable value records the analytics engine
//! consumes (holdings, allocation buckets, performance snapshots), the
//! [`Date`](types::Date) newtype used throughout, the numeric-or-raw
//! [`AllocationValue`](types::AllocationValue) union, and the shared
//! percentage-rounding convention.
//!
//! Records carry natural keys only (symbol, bucket label, date) and no
//! store-assigned identity. Fields the store cannot guarantee are
//! `Option`; validation lives in `folio-analytics`.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod rounding;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use rounding::round_pct;
pub use types::{
    AllocationValue, Date, Holding, MarketCapAllocationRecord, PerformanceRecord,
    SectorAllocationRecord,
};
