//! Outcome of a single derived-field formula.
//!
//! Every formula classifies its result as exactly one of three outcomes.
//! Consumers rely on telling a computed figure apart from a guard constant
//! and from the empty placeholder, so the distinction is kept in the type
//! instead of being flattened into a number.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::number::serialize_number;

/// Result of evaluating one formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// A finite number produced by the formula itself.
    Value(Decimal),
    /// A fixed domain constant substituted by one of the formula's guards.
    Sentinel(Decimal),
    /// No value: a divisor was zero or an operand was not numeric.
    #[default]
    Empty,
}

impl Metric {
    /// Sentinel `0`.
    pub const ZERO: Self = Self::Sentinel(Decimal::ZERO);
    /// Sentinel `10`.
    pub const TEN: Self = Self::Sentinel(Decimal::TEN);
    /// Sentinel `100`.
    pub const ONE_HUNDRED: Self = Self::Sentinel(Decimal::ONE_HUNDRED);

    /// Wraps an optional computation, mapping `None` to [`Metric::Empty`].
    #[must_use]
    pub fn from_option(value: Option<Decimal>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }

    /// Returns the numeric value for computed figures and sentinels.
    #[must_use]
    pub const fn number(&self) -> Option<Decimal> {
        match self {
            Self::Value(value) | Self::Sentinel(value) => Some(*value),
            Self::Empty => None,
        }
    }

    /// Returns true if this is the empty placeholder.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns true if a guard substituted a sentinel.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel(_))
    }
}

impl From<Decimal> for Metric {
    fn from(value: Decimal) -> Self {
        Self::Value(value)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) | Self::Sentinel(value) => write!(f, "{}", value.normalize()),
            Self::Empty => Ok(()),
        }
    }
}

/// Numbers serialize as JSON numbers, the placeholder as `""`.
impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) | Self::Sentinel(value) => serialize_number(value, serializer),
            Self::Empty => serializer.serialize_str(""),
        }
    }
}
