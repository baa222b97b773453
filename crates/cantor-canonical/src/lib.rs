//! Cantor normal form over well-founded numeric domains.
//!
//! `CNF(b, o)` writes a value `o` as `b^e1*c1 + b^e2*c2 + ...` with strictly
//! decreasing exponents and coefficients in `0 < c < b`. It is canonical: each
//! value has exactly one such expansion per base. Bases 0 and 1 admit no
//! positional expansion, so the whole value becomes the coefficient of
//! exponent zero.
//!
//! ```text
//! ValueArithmetic   <- zero, one, add, mul, opow, div, rem, log
//!     |
//! CnfRecursion      <- leading term + strictly smaller remainder
//!     |
//! Cnf               <- canonical (exponent, coefficient) sequence
//!     |
//! CnfAssoc          <- unique-key lookup by exponent
//!     |
//! CnfCoeffMap       <- total exponent -> coefficient map, zero default
//! ```
//!
#![deny(missing_docs)]

/// Value domains and the arithmetic they supply.
pub mod arithmetic;
/// Exponent-keyed lookup over a normal form.
pub mod assoc;
/// Finitely supported coefficient maps.
pub mod coeff;
/// Content digests of normal forms.
pub mod digest;
/// JSON document form and canonical bytes.
pub mod document;
/// Encoder and evaluator.
pub mod encoder;
/// `(exponent, coefficient)` terms.
pub mod entry;
/// Arithmetic contract faults.
pub mod error;
/// `b^e*c + ...` text notation and decimal parsing.
pub mod notation;
/// Well-founded descent: leading term plus strictly smaller remainder.
pub mod recursion;
/// Validation errors for externally supplied data.
pub mod validation;

pub use arithmetic::ValueArithmetic;
#[cfg(feature = "bigint")]
pub use arithmetic::MAX_BIGINT_BITS;
pub use assoc::CnfAssoc;
pub use coeff::{cnf_coeff, CnfCoeffMap};
pub use digest::{compute_cnf_digest, verify_cnf_digest, Digest, DigestAlg, DigestError};
pub use document::{CanonicalizationError, CnfDocument};
pub use encoder::{checked_eval_cnf, cnf, eval_cnf, try_cnf, Cnf};
pub use entry::Entry;
pub use error::CnfError;
pub use recursion::{CnfRecursion, Descent, Step};
pub use validation::ValidationError;

#[cfg(feature = "bigint")]
pub use num_bigint::BigUint;
