//! Cantor normal form encoding and evaluation.

use tracing::debug;

use crate::arithmetic::ValueArithmetic;
use crate::entry::Entry;
use crate::error::CnfError;
use crate::recursion::CnfRecursion;
use crate::validation::ValidationError;

/// Canonical base-`b` expansion of a value.
///
/// Exponents strictly decrease along the entries, every coefficient is
/// positive and, for bases above one, below the base. Values of this type
/// only come from the encoder or from [`Cnf::from_entries`], so the
/// invariants always hold and [`Cnf::eval`] never leaves the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnf<T> {
    base: T,
    entries: Vec<Entry<T>>,
}

/// Encodes `value` in base `base`.
///
/// # Panics
///
/// Panics if the [`ValueArithmetic`] implementation breaks its contract
/// (see [`try_cnf`]). The implementations shipped with this crate never do.
pub fn cnf<T: ValueArithmetic>(base: &T, value: &T) -> Cnf<T> {
    match try_cnf(&CnfRecursion::new(base.clone()), value) {
        Ok(form) => form,
        Err(err) => panic!("cnf arithmetic contract violated: {err}"),
    }
}

/// Encodes `value` with the given recursion, reporting arithmetic faults and
/// step-limit overruns instead of panicking.
pub fn try_cnf<T: ValueArithmetic>(
    recursion: &CnfRecursion<T>,
    value: &T,
) -> Result<Cnf<T>, CnfError> {
    let entries = recursion
        .descent(value.clone())
        .map(|step| step.map(|s| s.entry))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(base = ?recursion.base(), terms = entries.len(), "encoded value");
    Ok(Cnf {
        base: recursion.base().clone(),
        entries,
    })
}

/// Right fold `(e, c), acc -> base^e * c + acc` seeded at zero.
///
/// Accepts any entry list, canonical or not. Fixed-width domains follow the
/// host overflow rules for entries that do not come from the encoder.
pub fn eval_cnf<T: ValueArithmetic>(base: &T, entries: &[Entry<T>]) -> T {
    entries.iter().rev().fold(T::zero(), |acc, entry| {
        base.opow(&entry.exponent)
            .mul(&entry.coefficient)
            .add(&acc)
    })
}

/// [`eval_cnf`] with checked arithmetic: `None` if any partial result does
/// not fit the domain.
pub fn checked_eval_cnf<T: ValueArithmetic>(base: &T, entries: &[Entry<T>]) -> Option<T> {
    entries.iter().rev().try_fold(T::zero(), |acc, entry| {
        base.checked_opow(&entry.exponent)?
            .checked_mul(&entry.coefficient)?
            .checked_add(&acc)
    })
}

impl<T: ValueArithmetic> Cnf<T> {
    /// Encodes `value` in base `base`; see [`cnf`].
    pub fn encode(base: T, value: &T) -> Self {
        cnf(&base, value)
    }

    /// Validates externally supplied entries against the CNF invariants.
    ///
    /// The value the entries denote must also be representable in `T`
    /// (for `BigUint`, at most `MAX_BIGINT_BITS` wide).
    pub fn from_entries(base: T, entries: Vec<Entry<T>>) -> Result<Self, ValidationError> {
        let bounded = base > T::one();
        for (index, entry) in entries.iter().enumerate() {
            if index > 0 {
                let previous = &entries[index - 1].exponent;
                if entry.exponent >= *previous {
                    return Err(ValidationError::NotDecreasing {
                        index,
                        previous: format!("{:?}", previous),
                        exponent: format!("{:?}", entry.exponent),
                    });
                }
            }
            if entry.coefficient.is_zero() {
                return Err(ValidationError::ZeroCoefficient { index });
            }
            if bounded && entry.coefficient >= base {
                return Err(ValidationError::CoefficientTooLarge {
                    index,
                    coefficient: format!("{:?}", entry.coefficient),
                    base: format!("{:?}", base),
                });
            }
        }
        if !bounded {
            // Bases 0 and 1 only ever produce the single term (0, o).
            if let Some(entry) = entries.iter().find(|e| !e.exponent.is_zero()) {
                return Err(ValidationError::OutOfBounds {
                    field: "exponent",
                    value: format!("{:?}", entry.exponent),
                });
            }
        }
        if checked_eval_cnf(&base, &entries).is_none() {
            let exponent = entries
                .first()
                .map(|e| format!("{:?}", e.exponent))
                .unwrap_or_default();
            return Err(ValidationError::Unrepresentable { exponent });
        }
        Ok(Self { base, entries })
    }

    /// Value the form denotes.
    pub fn eval(&self) -> T {
        eval_cnf(&self.base, &self.entries)
    }

    /// Leading term; its exponent is `log_base(value)`.
    pub fn leading(&self) -> Option<&Entry<T>> {
        self.entries.first()
    }
}

impl<T> Cnf<T> {
    /// Base of the expansion.
    pub fn base(&self) -> &T {
        &self.base
    }

    /// Terms, leading term first.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` exactly for the form of zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the terms, leading term first.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Exponents in strictly decreasing order.
    pub fn exponents(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.exponent)
    }

    /// Coefficients in term order.
    pub fn coefficients(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.coefficient)
    }

    /// Consumes the form, returning its terms.
    pub fn into_entries(self) -> Vec<Entry<T>> {
        self.entries
    }

    /// Consumes the form, returning base and terms.
    pub fn into_parts(self) -> (T, Vec<Entry<T>>) {
        (self.base, self.entries)
    }
}

impl<'a, T> IntoIterator for &'a Cnf<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T> IntoIterator for Cnf<T> {
    type Item = Entry<T>;
    type IntoIter = std::vec::IntoIter<Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
