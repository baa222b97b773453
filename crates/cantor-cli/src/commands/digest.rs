//! Digest command implementation.

use cantor_canonical::compute_cnf_digest;

use super::encode_value;
use crate::output;

pub fn run(
    base: String,
    value: String,
    max_terms: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = encode_value(&base, &value, max_terms)?;
    let digest = compute_cnf_digest(&form).map_err(|e| format!("Digest failed: {}", e))?;

    println!("{}", output::format_json(&serde_json::to_value(&digest)?));
    Ok(())
}
