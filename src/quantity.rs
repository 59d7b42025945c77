//! Requested quantities.
//!
//! Callers hand over whatever they received (an integer, a float, a JSON
//! value); [`Quantity`] is the validated, strictly positive integer form.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::QueryError;

/// A strictly positive number of individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Creates a quantity; zero is rejected.
    #[must_use]
    pub const fn new(n: u64) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Self(n))
        }
    }

    /// Returns the raw count.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unvalidated quantity as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer too large for `i64`.
    Unsigned(u64),
    /// A floating point number; valid only when integral and positive.
    Float(f64),
    /// Anything else (strings, booleans, null, ...). Never valid.
    Other(JsonValue),
}

impl QuantityInput {
    /// Validates the input into a [`Quantity`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn validate(&self) -> Result<Quantity, QueryError> {
        let parsed = match *self {
            Self::Integer(n) => u64::try_from(n).ok().and_then(Quantity::new),
            Self::Unsigned(n) => Quantity::new(n),
            Self::Float(f) if f.is_finite() && f > 0.0 && f.fract() == 0.0 => {
                // `as` saturates at u64::MAX for huge integral floats.
                Quantity::new(f as u64)
            }
            Self::Float(_) | Self::Other(_) => None,
        };
        parsed.ok_or_else(|| QueryError::InvalidQuantity {
            input: self.to_string(),
        })
    }
}

impl fmt::Display for QuantityInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for QuantityInput {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for QuantityInput {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for QuantityInput {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u64> for QuantityInput {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Unsigned(n), Self::Integer)
    }
}

impl From<f64> for QuantityInput {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for QuantityInput {
    fn from(s: &str) -> Self {
        Self::Other(JsonValue::String(s.to_string()))
    }
}

impl From<Quantity> for QuantityInput {
    fn from(q: Quantity) -> Self {
        Self::from(q.get())
    }
}

impl From<JsonValue> for QuantityInput {
    fn from(value: JsonValue) -> Self {
        if let Some(n) = value.as_i64() {
            Self::Integer(n)
        } else if let Some(n) = value.as_u64() {
            Self::Unsigned(n)
        } else if let Some(x) = value.as_f64() {
            Self::Float(x)
        } else {
            Self::Other(value)
        }
    }
}
