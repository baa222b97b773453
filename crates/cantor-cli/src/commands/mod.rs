//! Subcommand implementations.

pub mod coeff;
pub mod digest;
pub mod encode;
pub mod eval;
pub mod verify;

use cantor_canonical::notation::parse_decimal;
use cantor_canonical::{try_cnf, BigUint, Cnf, CnfRecursion, Entry};

/// Parses a command-line number as an arbitrary-precision value.
pub fn parse_value(field: &'static str, raw: &str) -> Result<BigUint, Box<dyn std::error::Error>> {
    parse_decimal(field, raw.trim()).map_err(|e| format!("Invalid {}: {}", field, e).into())
}

/// Encodes `value` in `base`, honouring the configured term limit.
pub fn encode_value(
    base: &str,
    value: &str,
    max_terms: Option<usize>,
) -> Result<Cnf<BigUint>, Box<dyn std::error::Error>> {
    let base = parse_value("base", base)?;
    let value = parse_value("value", value)?;
    let mut recursion = CnfRecursion::new(base);
    if let Some(limit) = max_terms {
        recursion = recursion.with_step_limit(limit);
    }
    Ok(try_cnf(&recursion, &value)?)
}

/// Refuses entries whose value may be wider than `max_bits`.
///
/// The bound is `e * bits(base) + bits(c)` over the terms, which never
/// underestimates `base^e * c`.
pub fn check_width(
    base: &BigUint,
    entries: &[Entry<BigUint>],
    max_bits: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let base_bits = if *base <= BigUint::from(1u32) { 0 } else { base.bits() };
    for entry in entries {
        let width = &entry.exponent * base_bits + entry.coefficient.bits() + 1u32;
        if width > BigUint::from(max_bits) {
            return Err(format!(
                "Value needs up to {} bits, above the limit of {} (--max-bits)",
                width, max_bits
            )
            .into());
        }
    }
    Ok(())
}
