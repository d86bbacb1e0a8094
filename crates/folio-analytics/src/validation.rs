//! Record validation plumbing shared by the analyzers.
//!
//! Malformed records are dropped, not reported individually: the store is
//! filled from best-effort spreadsheet imports and a strict schema contract
//! would reject whole collections over one bad row. The drop count is kept
//! alongside the surviving records so callers can observe it, and is logged
//! at debug level.

/// A validated subset of an input collection.
///
/// `records` holds the surviving (possibly reshaped) records in input
/// order; `dropped` counts how many were discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    /// Surviving records, in input order.
    pub records: Vec<T>,
    /// Number of records discarded by validation.
    pub dropped: usize,
}

impl<T> Validated<T> {
    /// True if validation left nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Filters a collection through an extraction function, counting drops.
///
/// `extract` returns `Some` with the validated (possibly reshaped) record
/// or `None` to discard it. Order is preserved. When anything was dropped,
/// the count is logged at debug level under the given context label.
pub fn filter_valid<T, U>(
    context: &str,
    records: &[T],
    extract: impl Fn(&T) -> Option<U>,
) -> Validated<U> {
    let mut valid = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for record in records {
        match extract(record) {
            Some(value) => valid.push(value),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::debug!("{context}: dropped {dropped} invalid record(s)");
    }

    Validated {
        records: valid,
        dropped,
    }
}
