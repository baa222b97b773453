use thiserror::Error;

/// Validation errors for externally supplied CNF data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a value is outside the range its position admits.
    #[error("{field} ({value}) is out of bounds")]
    OutOfBounds {
        /// Field name that is out of bounds.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// Exponents must strictly decrease along the sequence.
    #[error("exponent {exponent} at term {index} does not decrease from {previous}")]
    NotDecreasing {
        /// Index of the offending term.
        index: usize,
        /// Exponent of the preceding term.
        previous: String,
        /// Offending exponent.
        exponent: String,
    },
    /// Every coefficient must be strictly positive.
    #[error("coefficient at term {index} is zero")]
    ZeroCoefficient {
        /// Index of the offending term.
        index: usize,
    },
    /// With a base above one, every coefficient must be strictly below the base.
    #[error("coefficient {coefficient} at term {index} is not below base {base}")]
    CoefficientTooLarge {
        /// Index of the offending term.
        index: usize,
        /// Offending coefficient.
        coefficient: String,
        /// Base of the expansion.
        base: String,
    },
    /// The terms denote a value the domain cannot hold.
    #[error("terms led by exponent {exponent} denote a value outside the domain")]
    Unrepresentable {
        /// Exponent of the leading term.
        exponent: String,
    },
}
