//! Well-founded descent through a value.
//!
//! A nonzero value `o` splits into its leading term `b^e * c` with
//! `e = log_b o`, `c = o / b^e`, and the remainder `o mod b^e`. The remainder
//! is strictly smaller than `o`, so repeating the split reaches zero. The
//! decrease is checked on every step instead of being trusted.

use std::iter::FusedIterator;

use tracing::{trace, warn};

use crate::arithmetic::ValueArithmetic;
use crate::entry::Entry;
use crate::error::CnfError;

/// One decomposition step: `value = base^exponent * coefficient + remainder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    /// Value being decomposed.
    pub value: T,
    /// Its leading term.
    pub entry: Entry<T>,
    /// What is left once the leading term is removed.
    pub remainder: T,
}

/// Recursion scheme over a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnfRecursion<T> {
    base: T,
    step_limit: Option<usize>,
}

impl<T: ValueArithmetic> CnfRecursion<T> {
    /// Creates an unbounded recursion over `base`.
    pub fn new(base: T) -> Self {
        Self {
            base,
            step_limit: None,
        }
    }

    /// Fails the descent with [`CnfError::StepLimitExceeded`] once more than
    /// `limit` terms would be emitted.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Base of the expansion.
    pub fn base(&self) -> &T {
        &self.base
    }

    /// Configured step limit, if any.
    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    /// Splits `value` into its leading term and remainder; `None` for zero.
    ///
    /// Bases 0 and 1 admit no positional expansion: the whole value becomes
    /// the single coefficient of exponent zero.
    pub fn step(&self, value: &T) -> Option<Step<T>> {
        if value.is_zero() {
            return None;
        }
        if self.base <= T::one() {
            return Some(Step {
                value: value.clone(),
                entry: Entry::new(T::zero(), value.clone()),
                remainder: T::zero(),
            });
        }
        let exponent = T::log(&self.base, value);
        let power = self.base.opow(&exponent);
        let coefficient = value.div(&power);
        let remainder = value.rem(&power);
        Some(Step {
            value: value.clone(),
            entry: Entry::new(exponent, coefficient),
            remainder,
        })
    }

    fn check(&self, step: &Step<T>) -> Result<(), CnfError> {
        let violation = |reason: String| CnfError::InvariantViolation {
            value: format!("{:?}", step.value),
            reason,
        };
        if step.remainder >= step.value {
            return Err(violation(format!(
                "remainder {:?} is not below the value",
                step.remainder
            )));
        }
        if step.entry.coefficient.is_zero() {
            return Err(violation("leading coefficient is zero".to_string()));
        }
        if self.base > T::one() && step.entry.coefficient >= self.base {
            return Err(violation(format!(
                "leading coefficient {:?} is not below base {:?}",
                step.entry.coefficient, self.base
            )));
        }
        Ok(())
    }

    /// Iterates the steps from `value` down to zero, leading term first.
    pub fn descent(&self, value: T) -> Descent<'_, T> {
        Descent {
            recursion: self,
            current: value,
            emitted: 0,
            halted: false,
        }
    }

    /// Structural recursion: computes `C(value)` from `C(0) = zero` and
    /// `C(o) = step(o, C(o mod b^log_b o))`.
    pub fn fold<C, F>(&self, value: T, zero: C, mut step: F) -> Result<C, CnfError>
    where
        F: FnMut(&Step<T>, C) -> C,
    {
        let steps = self.descent(value).collect::<Result<Vec<_>, _>>()?;
        Ok(steps.iter().rev().fold(zero, |acc, s| step(s, acc)))
    }
}

/// Iterator returned by [`CnfRecursion::descent`].
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug)]
pub struct Descent<'r, T> {
    recursion: &'r CnfRecursion<T>,
    current: T,
    emitted: usize,
    halted: bool,
}

impl<T: ValueArithmetic> Iterator for Descent<'_, T> {
    type Item = Result<Step<T>, CnfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let Some(step) = self.recursion.step(&self.current) else {
            self.halted = true;
            return None;
        };
        if let Some(limit) = self.recursion.step_limit {
            if self.emitted >= limit {
                self.halted = true;
                warn!(limit, "cnf descent exceeded its step limit");
                return Some(Err(CnfError::StepLimitExceeded { limit }));
            }
        }
        if let Err(err) = self.recursion.check(&step) {
            self.halted = true;
            warn!(error = %err, "cnf descent broke an arithmetic invariant");
            return Some(Err(err));
        }
        trace!(
            exponent = ?step.entry.exponent,
            coefficient = ?step.entry.coefficient,
            "cnf step"
        );
        self.emitted += 1;
        self.current = step.remainder.clone();
        Some(Ok(step))
    }
}

impl<T: ValueArithmetic> FusedIterator for Descent<'_, T> {}
