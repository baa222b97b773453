use canonical_json::to_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::arithmetic::ValueArithmetic;
use crate::encoder::Cnf;
use crate::entry::Entry;
use crate::notation::decimal;
use crate::validation::ValidationError;

/// JSON document form of a [`Cnf`].
///
/// `{"base": "2", "terms": [{"e": "2", "c": "1"}, {"e": "0", "c": "1"}]}`.
/// A document is only a claim; converting it into a [`Cnf`] validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: fmt::Display",
    deserialize = "T: FromStr, T::Err: fmt::Display"
))]
pub struct CnfDocument<T> {
    /// Base of the expansion.
    #[serde(with = "decimal")]
    pub base: T,
    /// Terms, leading term first.
    pub terms: Vec<Entry<T>>,
}

/// Error returned when canonical bytes cannot be produced.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The document could not be converted to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// RFC 8785 canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonical(String),
}

impl<T: Clone> From<&Cnf<T>> for CnfDocument<T> {
    fn from(form: &Cnf<T>) -> Self {
        Self {
            base: form.base().clone(),
            terms: form.entries().to_vec(),
        }
    }
}

impl<T: ValueArithmetic> TryFrom<CnfDocument<T>> for Cnf<T> {
    type Error = ValidationError;

    fn try_from(document: CnfDocument<T>) -> Result<Self, Self::Error> {
        Cnf::from_entries(document.base, document.terms)
    }
}

impl<T: ValueArithmetic + fmt::Display> Cnf<T> {
    /// Document form of this expansion.
    pub fn to_document(&self) -> CnfDocument<T> {
        CnfDocument::from(self)
    }

    /// RFC 8785 canonical bytes of the document form.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, CanonicalizationError> {
        let value = serde_json::to_value(self.to_document())?;
        let canonical =
            to_string(&value).map_err(|err| CanonicalizationError::Canonical(err.to_string()))?;
        Ok(canonical.into_bytes())
    }
}
