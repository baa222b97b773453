use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::notation::decimal;

/// One `(exponent, coefficient)` term of a Cantor normal form.
///
/// Serialized as `{"e": "<exponent>", "c": "<coefficient>"}` with decimal
/// strings, so values wider than a JSON number survive the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: fmt::Display",
    deserialize = "T: FromStr, T::Err: fmt::Display"
))]
pub struct Entry<T> {
    /// Power of the base this term multiplies.
    #[serde(rename = "e", with = "decimal")]
    pub exponent: T,
    /// Multiplier of `base ^ exponent`.
    #[serde(rename = "c", with = "decimal")]
    pub coefficient: T,
}

impl<T> Entry<T> {
    /// Pairs an exponent with its coefficient.
    pub fn new(exponent: T, coefficient: T) -> Self {
        Self {
            exponent,
            coefficient,
        }
    }

    /// Splits the entry back into `(exponent, coefficient)`.
    pub fn into_pair(self) -> (T, T) {
        (self.exponent, self.coefficient)
    }
}

impl<T> From<(T, T)> for Entry<T> {
    fn from((exponent, coefficient): (T, T)) -> Self {
        Self::new(exponent, coefficient)
    }
}

impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exponent, self.coefficient)
    }
}
