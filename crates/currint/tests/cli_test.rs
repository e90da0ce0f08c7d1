//! End-to-end tests running the built binaries.
//!
//! These check exit codes and the stdout/stderr split, which the in-crate
//! `run` tests cannot see.

use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_format_success() {
    let output = run(env!("CARGO_BIN_EXE_currint-format"), &["USD", "-132"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "$-1.32\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_format_precision_error_exits_1() {
    let output = run(
        env!("CARGO_BIN_EXE_currint-format"),
        &["GBP", "12.432", "--major"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.starts_with("error: "), "{err}");
    assert!(err.contains("fractional amount of minor unit"), "{err}");
}

#[test]
fn test_usage_error_exits_2() {
    let output = run(env!("CARGO_BIN_EXE_currint-format"), &["USD"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = run(env!("CARGO_BIN_EXE_currint-format"), &["-v", "MRO", "7"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.2 MRO\n");
    assert!(stderr(&output).contains("parsing amount"));
}

#[test]
fn test_convert() {
    let output = run(
        env!("CARGO_BIN_EXE_currint-convert"),
        &["USD", "2124", "EUR", "0.92"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "€19.54\n");
}

#[test]
fn test_sum_mismatch_exits_1() {
    let output = run(env!("CARGO_BIN_EXE_currint-sum"), &["USD:1", "GBP:1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("different currencies"));
}

#[test]
fn test_currencies_json() {
    let output = run(
        env!("CARGO_BIN_EXE_currint-currencies"),
        &["--format", "json", "GBP"],
    );
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["prefix"], "£");
    assert_eq!(json[0]["numeric_code"], "826");
}

#[test]
fn test_generate_completions() {
    let output = run(
        env!("CARGO_BIN_EXE_currint-sum"),
        &["--generate-completions", "bash"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("currint-sum"));
}
