//! Coeff command implementation.

use cantor_canonical::{CnfAssoc, CnfCoeffMap};
use serde_json::json;

use super::{encode_value, parse_value};
use crate::output;

pub fn run(
    base: String,
    value: String,
    exponent: Option<String>,
    json_output: bool,
    max_terms: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let form = encode_value(&base, &value, max_terms)?;
    let coefficients = CnfCoeffMap::from(CnfAssoc::from(form));

    if let Some(raw) = exponent {
        let exponent = parse_value("exponent", &raw)?;
        let coefficient = coefficients.get(&exponent);
        if json_output {
            let body = json!({
                "exponent": exponent.to_string(),
                "coefficient": coefficient.to_string()
            });
            println!("{}", output::format_json(&body));
        } else {
            println!("{}", coefficient);
        }
        return Ok(());
    }

    // Leading term first, as in the normal form.
    let mut rows: Vec<_> = coefficients.iter().collect();
    rows.reverse();

    if json_output {
        let body: Vec<_> = rows
            .iter()
            .map(|(e, c)| json!({"exponent": e.to_string(), "coefficient": c.to_string()}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        output::print_table_header();
        for (e, c) in rows {
            println!("{}", output::format_table_row(e, c));
        }
    }
    Ok(())
}
