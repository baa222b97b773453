//! Finitely supported coefficient function of a Cantor normal form.

use std::collections::BTreeMap;

use crate::arithmetic::ValueArithmetic;
use crate::assoc::CnfAssoc;

/// Total map `exponent -> coefficient`, zero off the support.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CnfCoeffMap<T> {
    coefficients: BTreeMap<T, T>,
}

/// Coefficient map of `CNF(base, value)`.
pub fn cnf_coeff<T: ValueArithmetic>(base: &T, value: &T) -> CnfCoeffMap<T> {
    CnfCoeffMap::from(CnfAssoc::new(base, value))
}

impl<T: ValueArithmetic> CnfCoeffMap<T> {
    /// Coefficient at `exponent`, or zero when the exponent carries no term.
    pub fn get(&self, exponent: &T) -> T {
        self.coefficients
            .get(exponent)
            .cloned()
            .unwrap_or_else(T::zero)
    }

    /// Borrows the map as a plain function.
    pub fn as_fn(&self) -> impl Fn(&T) -> T + '_ {
        move |exponent| self.get(exponent)
    }
}

impl<T> CnfCoeffMap<T> {
    /// Exponents with a nonzero coefficient, ascending.
    pub fn support(&self) -> impl Iterator<Item = &T> + '_ {
        self.coefficients.keys()
    }

    /// Size of the support.
    pub fn support_len(&self) -> usize {
        self.coefficients.len()
    }

    /// `true` for the zero map.
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Nonzero `(exponent, coefficient)` pairs, ascending by exponent.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.coefficients.iter()
    }
}

impl<T: Ord> From<CnfAssoc<T>> for CnfCoeffMap<T> {
    fn from(assoc: CnfAssoc<T>) -> Self {
        Self {
            coefficients: assoc
                .into_entries()
                .into_iter()
                .map(|e| (e.exponent, e.coefficient))
                .collect(),
        }
    }
}
