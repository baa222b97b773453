//! Text notation for Cantor normal forms.
//!
//! A form is written as `b^e*c` terms joined by `+`, leading term first, for
//! example `2^2*1 + 2^0*1`. A coefficient of one may be left out (`2^2`), and
//! the empty form is written `0`. All numbers are canonical decimals: no sign,
//! no leading zeros.

use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::arithmetic::ValueArithmetic;
use crate::encoder::Cnf;
use crate::entry::Entry;
use crate::validation::ValidationError;

/// Parses the terms of a notation string, checking each term's base.
///
/// Only the shape of the terms is checked here; [`Cnf::from_notation`] also
/// enforces the ordering and coefficient invariants.
pub fn parse_terms<T>(base: &T, text: &str) -> Result<Vec<Entry<T>>, ValidationError>
where
    T: ValueArithmetic + FromStr + fmt::Display,
{
    let text = text.trim();
    if text == "0" {
        return Ok(Vec::new());
    }
    let re = Regex::new(r"^([0-9]+)\^([0-9]+)(?:\*([0-9]+))?$").expect("invalid regex");
    let expected_base = base.to_string();
    let mut entries = Vec::new();
    for term in text.split('+') {
        let compact: String = term.chars().filter(|c| !c.is_whitespace()).collect();
        let captures = re
            .captures(&compact)
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "term",
                value: term.trim().to_string(),
            })?;
        let term_base = &captures[1];
        if !is_canonical_decimal(term_base) || term_base != expected_base {
            return Err(ValidationError::PatternMismatch {
                field: "base",
                value: term_base.to_string(),
            });
        }
        let exponent = parse_decimal("exponent", &captures[2])?;
        let coefficient = match captures.get(3) {
            Some(raw) => parse_decimal("coefficient", raw.as_str())?,
            None => T::one(),
        };
        entries.push(Entry::new(exponent, coefficient));
    }
    Ok(entries)
}

/// Parses one canonical decimal into the value domain.
pub fn parse_decimal<T>(field: &'static str, raw: &str) -> Result<T, ValidationError>
where
    T: FromStr,
{
    if !is_canonical_decimal(raw) {
        return Err(ValidationError::PatternMismatch {
            field,
            value: raw.to_string(),
        });
    }
    raw.parse().map_err(|_| ValidationError::OutOfBounds {
        field,
        value: raw.to_string(),
    })
}

fn is_canonical_decimal(value: &str) -> bool {
    let re = Regex::new(r"^(0|[1-9][0-9]*)$").expect("invalid regex");
    re.is_match(value)
}

impl<T> Cnf<T>
where
    T: ValueArithmetic + FromStr + fmt::Display,
{
    /// Parses notation such as `3^2*1 + 3^0*1` into a validated form.
    pub fn from_notation(base: T, text: &str) -> Result<Self, ValidationError> {
        let entries = parse_terms(&base, text)?;
        Cnf::from_entries(base, entries)
    }
}

impl<T: fmt::Display> fmt::Display for Cnf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries().is_empty() {
            return write!(f, "0");
        }
        for (idx, entry) in self.entries().iter().enumerate() {
            if idx > 0 {
                write!(f, " + ")?;
            }
            write!(
                f,
                "{}^{}*{}",
                self.base(),
                entry.exponent,
                entry.coefficient
            )?;
        }
        Ok(())
    }
}

/// Serde adapter storing values as canonical decimal strings.
pub(crate) mod decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: fmt::Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if !super::is_canonical_decimal(&raw) {
            return Err(de::Error::custom(format!(
                "'{}' is not a canonical decimal",
                raw
            )));
        }
        raw.parse().map_err(de::Error::custom)
    }
}
