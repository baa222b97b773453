//! Encode command implementation.

use super::encode_value;
use crate::output;

pub fn run(
    base: String,
    value: String,
    json_output: bool,
    max_terms: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = encode_value(&base, &value, max_terms)?;

    if json_output {
        println!("{}", output::format_json(&output::document_json(&form)?));
    } else {
        println!("{}", form);
    }
    Ok(())
}
