//! Error types for the analytics engine.
//!
//! Every analyzer entry point returns one of three recoverable failure
//! kinds. None is fatal; the caller maps them onto its own surface
//! (typically 404 for `NoData`, 400 for `InvalidInput`, 500 for
//! `Internal`).

use folio_core::CoreError;
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The relevant collection is empty after validation filtering.
    #[error("No data: {reason}")]
    NoData {
        /// What was missing.
        reason: String,
    },

    /// Data is present but numerically degenerate.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the data cannot be summarized.
        reason: String,
    },

    /// An unanticipated fault inside the engine.
    ///
    /// Computation faults not covered by validation (such as decimal
    /// overflow in a summation) are contained at the engine boundary and
    /// reported here rather than propagating as a panic.
    #[error("Internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

impl AnalyticsError {
    /// Create a no-data error.
    #[must_use]
    pub fn no_data(reason: impl Into<String>) -> Self {
        Self::NoData {
            reason: reason.into(),
        }
    }

    /// Create an invalid-input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        Self::internal(err.to_string())
    }
}
