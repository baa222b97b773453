use thiserror::Error;

/// Faults raised while descending through a value.
///
/// These indicate that a [`ValueArithmetic`](crate::ValueArithmetic)
/// implementation broke its contract; they are never caused by the input value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CnfError {
    /// The arithmetic layer produced a step that violates the CNF invariants.
    #[error("invariant violation at {value}: {reason}")]
    InvariantViolation {
        /// Debug rendering of the value being decomposed.
        value: String,
        /// What went wrong.
        reason: String,
    },
    /// More terms were emitted than the configured step limit.
    #[error("step limit of {limit} terms exceeded")]
    StepLimitExceeded {
        /// Configured limit.
        limit: usize,
    },
}
