//! Numeric-or-raw value representation for allocation records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An allocation value that is numeric when possible and raw text otherwise.
///
/// Upstream spreadsheets occasionally deliver an aggregate value as text
/// (`"N/A"`, `"1,234"`). The aggregation contract keeps such values instead
/// of rejecting the record, so the value field is a tagged union: a coerced
/// `Decimal` when the text is numeric, the original string when it is not.
///
/// Serialization is untagged: `Number` serializes as a JSON number and
/// `Raw` as the original JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllocationValue {
    /// A numeric value.
    Number(Decimal),
    /// Text that could not be interpreted numerically.
    Raw(String),
}

impl AllocationValue {
    /// Coerces text into a numeric value where possible.
    ///
    /// Returns `Number` if the string parses as a decimal, otherwise `Raw`
    /// carrying the original string unchanged.
    #[must_use]
    pub fn coerce(text: impl Into<String>) -> Self {
        let text = text.into();
        match Decimal::from_str(text.trim()) {
            Ok(value) => AllocationValue::Number(value),
            Err(_) => AllocationValue::Raw(text),
        }
    }

    /// Returns the numeric value, if this is a `Number`.
    #[must_use]
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            AllocationValue::Number(value) => Some(*value),
            AllocationValue::Raw(_) => None,
        }
    }

    /// Returns true if this is a numeric value.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, AllocationValue::Number(_))
    }
}

impl From<Decimal> for AllocationValue {
    fn from(value: Decimal) -> Self {
        AllocationValue::Number(value)
    }
}

impl fmt::Display for AllocationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationValue::Number(value) => write!(f, "{value}"),
            AllocationValue::Raw(text) => write!(f, "{text}"),
        }
    }
}
