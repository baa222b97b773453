//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cantor"))
        .args(args)
        .env_remove("CANTOR_MAX_TERMS")
        .env_remove("CANTOR_MAX_BITS")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

fn run_cli_with_stdin(args: &[&str], input: &str) -> (bool, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cantor"))
        .args(args)
        .env_remove("CANTOR_MAX_BITS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

fn write_document(dir: &TempDir, name: &str, body: &Value) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(body).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_encode_prints_notation() {
    let (success, stdout, _) = run_cli(&["encode", "2", "5"]);
    assert!(success);
    assert_eq!(stdout.trim(), "2^2*1 + 2^0*1");
}

#[test]
fn test_encode_zero_and_degenerate_bases() {
    let (_, stdout, _) = run_cli(&["encode", "2", "0"]);
    assert_eq!(stdout.trim(), "0");

    let (_, stdout, _) = run_cli(&["encode", "0", "7"]);
    assert_eq!(stdout.trim(), "0^0*7");

    let (_, stdout, _) = run_cli(&["encode", "1", "7"]);
    assert_eq!(stdout.trim(), "1^0*7");
}

#[test]
fn test_encode_json_document() {
    let (success, stdout, _) = run_cli(&["encode", "3", "10", "--json"]);
    assert!(success);
    let body: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        body,
        json!({"base": "3", "terms": [{"e": "2", "c": "1"}, {"e": "0", "c": "1"}]})
    );
}

#[test]
fn test_encode_beyond_u64() {
    let (success, stdout, _) = run_cli(&["encode", "10", "1000000000000000000000000000001"]);
    assert!(success);
    assert_eq!(stdout.trim(), "10^30*1 + 10^0*1");
}

#[test]
fn test_encode_rejects_malformed_number() {
    let (success, _, stderr) = run_cli(&["encode", "2", "05"]);
    assert!(!success);
    assert!(stderr.contains("Invalid value"));
}

#[test]
fn test_max_terms_limits_encoding() {
    let (success, _, stderr) = run_cli(&["--max-terms", "1", "encode", "2", "5"]);
    assert!(!success);
    assert!(stderr.contains("step limit"));

    let (success, _, _) = run_cli(&["--max-terms", "2", "encode", "2", "5"]);
    assert!(success);
}

#[test]
fn test_eval_round_trips_encode() {
    let (_, encoded, _) = run_cli(&["encode", "7", "123456789"]);
    let (success, stdout, _) = run_cli(&["eval", "7", encoded.trim()]);
    assert!(success);
    assert_eq!(stdout.trim(), "123456789");
}

#[test]
fn test_eval_rejects_non_normal_form_unless_lenient() {
    let (success, _, stderr) = run_cli(&["eval", "2", "2^1*3"]);
    assert!(!success);
    assert!(stderr.contains("Not a normal form"));

    let (success, stdout, _) = run_cli(&["eval", "2", "2^1*3", "--lenient"]);
    assert!(success);
    assert_eq!(stdout.trim(), "6");
}

#[test]
fn test_eval_refuses_values_past_max_bits() {
    let (success, _, stderr) = run_cli(&["eval", "2", "2^99999999999999999999*1"]);
    assert!(!success);
    assert!(stderr.starts_with("Error:"));
    assert!(stderr.contains("--max-bits"));

    let (success, _, stderr) = run_cli(&["eval", "2", "2^99999999999999999999*1", "--lenient"]);
    assert!(!success);
    assert!(stderr.contains("--max-bits"));
}

#[test]
fn test_max_bits_from_env_and_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_cantor"))
        .args(["eval", "2", "2^10*1"])
        .env("CANTOR_MAX_BITS", "8")
        .output()
        .expect("Failed to execute CLI");
    assert!(!output.status.success());

    let (success, stdout, _) = run_cli(&["--max-bits", "64", "eval", "2", "2^10*1"]);
    assert!(success);
    assert_eq!(stdout.trim(), "1024");
}

#[test]
fn test_coeff_single_exponent() {
    let (_, stdout, _) = run_cli(&["coeff", "10", "30405", "2"]);
    assert_eq!(stdout.trim(), "4");

    let (_, stdout, _) = run_cli(&["coeff", "10", "30405", "3"]);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_coeff_table_lists_support() {
    let (success, stdout, _) = run_cli(&["coeff", "10", "30405"]);
    assert!(success);
    assert!(stdout.contains("EXPONENT"));
    let rows: Vec<&str> = stdout.lines().skip(2).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with('4'));
}

#[test]
fn test_coeff_json() {
    let (_, stdout, _) = run_cli(&["coeff", "2", "5", "--json"]);
    let body: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        body,
        json!([
            {"exponent": "2", "coefficient": "1"},
            {"exponent": "0", "coefficient": "1"}
        ])
    );
}

#[test]
fn test_verify_valid_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(
        &temp_dir,
        "five.json",
        &json!({"base": "2", "terms": [{"e": "2", "c": "1"}, {"e": "0", "c": "1"}]}),
    );

    let (success, stdout, _) = run_cli(&["verify", &path, "--strict"]);
    assert!(success);
    assert!(stdout.starts_with("OK"));
    assert!(stdout.trim().ends_with("= 5"));
}

#[test]
fn test_verify_invalid_document_strict() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(
        &temp_dir,
        "bad.json",
        &json!({"base": "2", "terms": [{"e": "1", "c": "2"}]}),
    );

    let (success, stdout, _) = run_cli(&["verify", &path]);
    assert!(success);
    assert!(stdout.starts_with("INVALID"));

    let (success, _, _) = run_cli(&["verify", &path, "--strict"]);
    assert!(!success);
}

#[test]
fn test_verify_refuses_oversized_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_document(
        &temp_dir,
        "huge.json",
        &json!({"base": "2", "terms": [{"e": "1099511627776", "c": "1"}]}),
    );

    let (success, stdout, stderr) = run_cli(&["verify", &path]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("--max-bits"));
}

#[test]
fn test_verify_json_output_from_stdin() {
    let body = json!({"base": "5", "terms": [{"e": "1", "c": "1"}]}).to_string();
    let (success, stdout) = run_cli_with_stdin(&["verify", "--json"], &body);
    assert!(success);
    let verdict: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(verdict["verdict"], "Ok");
    assert_eq!(verdict["value"], "5");
}

#[test]
fn test_verify_missing_file() {
    let (success, _, stderr) = run_cli(&["verify", "/nonexistent/cnf.json"]);
    assert!(!success);
    assert!(stderr.contains("failed to read"));
}

#[test]
fn test_digest_is_stable() {
    let (success, first, _) = run_cli(&["digest", "2", "5"]);
    assert!(success);
    let (_, second, _) = run_cli(&["digest", "2", "5"]);
    assert_eq!(first, second);

    let body: Value = serde_json::from_str(&first).unwrap();
    assert_eq!(
        body,
        json!({"alg": "sha-256", "b64": "NDa3hekDN_MJfV4fFJ4JJVSLydgbhcULz9nb2J7jxtQ"})
    );

    let (_, other, _) = run_cli(&["digest", "2", "6"]);
    assert_ne!(first, other);
}
