//! Output formatting utilities.

use cantor_canonical::{BigUint, Cnf};
use serde_json::Value;

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a term as a table row.
pub fn format_table_row(exponent: &BigUint, coefficient: &BigUint) -> String {
    format!("{:<24} {}", exponent, coefficient)
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<24} {}", "EXPONENT", "COEFFICIENT");
    println!("{}", "-".repeat(50));
}

/// Document form of `form` as JSON.
pub fn document_json(form: &Cnf<BigUint>) -> Result<Value, serde_json::Error> {
    serde_json::to_value(form.to_document())
}
