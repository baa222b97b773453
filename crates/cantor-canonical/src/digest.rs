//! Content digests of Cantor normal forms.
//!
//! Digests are computed as `sha256(domain_separator || canonical_bytes(cnf))`.
//! A normal form is canonical, so two values in the same base share a digest
//! exactly when they are equal.

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;

use crate::arithmetic::ValueArithmetic;
use crate::document::CanonicalizationError;
use crate::encoder::Cnf;
use crate::validation::ValidationError;

/// Domain separator for CNF digests: `b"cantor:cnf:v1\0"`.
const CNF_DOMAIN_SEPARATOR: &[u8] = b"cantor:cnf:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl Digest {
    /// Constructs a validated digest.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: b64,
            });
        }
        Ok(Digest { alg, b64 })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha-256:{}", self.b64)
    }
}

/// Error during digest computation.
#[derive(thiserror::Error, Debug)]
pub enum DigestError {
    /// Canonical bytes could not be produced.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),
    /// Digest construction failed.
    #[error("digest construction failed: {0}")]
    Digest(#[from] ValidationError),
}

/// Computes the digest of a normal form.
///
/// # Example
///
/// ```rust
/// use cantor_canonical::{cnf, compute_cnf_digest};
///
/// let five = compute_cnf_digest(&cnf(&2u64, &5))?;
/// assert_eq!(five, compute_cnf_digest(&cnf(&2u64, &5))?);
/// assert_ne!(five, compute_cnf_digest(&cnf(&2u64, &6))?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_cnf_digest<T>(form: &Cnf<T>) -> Result<Digest, DigestError>
where
    T: ValueArithmetic + fmt::Display,
{
    let bytes = form.canonical_bytes()?;

    let mut hasher = Sha256::new();
    hasher.update(CNF_DOMAIN_SEPARATOR);
    hasher.update(&bytes);
    let hash_bytes = hasher.finalize();

    use base64::Engine;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Ok(Digest::new(DigestAlg::Sha256, b64)?)
}

/// Returns `true` if `claimed` matches the digest recomputed from `form`.
pub fn verify_cnf_digest<T>(form: &Cnf<T>, claimed: &Digest) -> Result<bool, DigestError>
where
    T: ValueArithmetic + fmt::Display,
{
    let computed = compute_cnf_digest(form)?;
    Ok(claimed == &computed)
}
