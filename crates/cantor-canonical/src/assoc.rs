//! Associative view of a Cantor normal form.
//!
//! Keys are exponents. The encoder emits them in strictly decreasing order, so
//! they are unique without any deduplication pass, and lookup is a binary
//! search over the descending sequence.

use crate::arithmetic::ValueArithmetic;
use crate::encoder::{cnf, Cnf};
use crate::entry::Entry;

/// Exponent-keyed association list over `CNF(b, o)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CnfAssoc<T> {
    entries: Vec<Entry<T>>,
}

impl<T: ValueArithmetic> CnfAssoc<T> {
    /// Builds the association list of `CNF(base, value)`.
    pub fn new(base: &T, value: &T) -> Self {
        Self::from(cnf(base, value))
    }

    /// `true` iff the encoded value is zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` iff `exponent` is a key.
    pub fn contains_exponent(&self, exponent: &T) -> bool {
        self.position(exponent).is_ok()
    }

    /// Coefficient paired with `exponent`, if present.
    pub fn lookup(&self, exponent: &T) -> Option<&T> {
        self.position(exponent)
            .ok()
            .map(|idx| &self.entries[idx].coefficient)
    }

    fn position(&self, exponent: &T) -> Result<usize, usize> {
        // Entries are sorted by descending exponent.
        self.entries
            .binary_search_by(|entry| exponent.cmp(&entry.exponent))
    }
}

impl<T> CnfAssoc<T> {
    /// Keys in strictly decreasing order.
    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.exponent)
    }

    /// Key/value pairs in strictly decreasing key order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.entries.iter().map(|e| (&e.exponent, &e.coefficient))
    }

    /// Underlying entries.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Consumes the view, returning its entries.
    pub fn into_entries(self) -> Vec<Entry<T>> {
        self.entries
    }
}

impl<T> From<Cnf<T>> for CnfAssoc<T> {
    fn from(form: Cnf<T>) -> Self {
        Self {
            entries: form.into_entries(),
        }
    }
}
