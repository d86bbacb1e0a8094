//! Core record and value types.
//!
//! All records are immutable snapshots delivered by an external store.
//! Fields the store cannot guarantee are `Option`; validation and
//! filtering live in the analytics crate, not here.

mod allocation;
mod date;
mod holding;
mod performance;
mod value;

pub use allocation::{MarketCapAllocationRecord, SectorAllocationRecord};
pub use date::Date;
pub use holding::Holding;
pub use performance::PerformanceRecord;
pub use value::AllocationValue;
