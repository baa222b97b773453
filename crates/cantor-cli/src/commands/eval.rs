//! Eval command implementation.

use cantor_canonical::notation::parse_terms;
use cantor_canonical::{checked_eval_cnf, Cnf};

use super::{check_width, parse_value};

pub fn run(
    base: String,
    notation: String,
    lenient: bool,
    max_bits: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let base = parse_value("base", &base)?;
    let entries = parse_terms(&base, &notation).map_err(|e| format!("Invalid notation: {}", e))?;
    check_width(&base, &entries, max_bits)?;

    let value = if lenient {
        checked_eval_cnf(&base, &entries).ok_or("Value is too wide to evaluate")?
    } else {
        Cnf::from_entries(base, entries)
            .map_err(|e| format!("Not a normal form: {}", e))?
            .eval()
    };

    println!("{}", value);
    Ok(())
}
