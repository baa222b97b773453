//! Verify command implementation.

use cantor_canonical::{BigUint, Cnf, CnfDocument};
use serde_json::json;
use std::io::{self, Read};
use tracing::{debug, info};

use super::check_width;
use crate::error::CliError;

pub fn run(
    input: Option<String>,
    strict: bool,
    json_output: bool,
    max_bits: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read JSON from file or stdin
    let json_str = if let Some(path) = input {
        std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            source_name: path.clone(),
            source,
        })?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                source_name: "stdin".to_string(),
                source,
            })?;
        buffer
    };

    let document: CnfDocument<BigUint> =
        serde_json::from_str(&json_str).map_err(CliError::InvalidJson)?;
    debug!(terms = document.terms.len(), "parsed document");
    check_width(&document.base, &document.terms, max_bits)?;

    let outcome = Cnf::try_from(document);
    let valid = outcome.is_ok();

    if json_output {
        let body = match &outcome {
            Ok(form) => json!({
                "verdict": "Ok",
                "value": form.eval().to_string(),
                "notation": form.to_string()
            }),
            Err(err) => json!({
                "verdict": "Invalid",
                "reason": err.to_string()
            }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        match &outcome {
            Ok(form) => println!("OK {} = {}", form, form.eval()),
            Err(err) => println!("INVALID {}", err),
        }
    }
    info!(valid, "verified document");

    if strict && !valid {
        std::process::exit(1);
    }

    Ok(())
}
