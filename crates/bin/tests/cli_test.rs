//! Runs the `fundbench` binary against an empty configuration file.

use std::process::{Command, Output};

fn fundbench(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_fundbench"))
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_lookup_reports_miss_and_succeeds() {
    let output = fundbench(&["lookup", "Commodities", "Large Blend"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Commodities"));
    assert!(lines[0].contains("no benchmark"));
    assert!(lines[1].contains("us_equity (ITOT)"));
}

#[test]
fn test_lookup_json() {
    let output = fundbench(&["--format", "json", "lookup", "Emerging Markets", "Gold"]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows[0]["benchmark_key"], "emerging");
    assert_eq!(rows[0]["ticker"], "IEMG");
    assert!(rows[1]["benchmark_key"].is_null());
}

#[test]
fn test_missing_config_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_fundbench"))
        .env_remove("RUST_LOG")
        .args(["--config", "/nonexistent/fundbench.toml", "validate"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).starts_with("Error:"));
}

#[test]
fn test_invalid_environment_override_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fundbench"))
        .env_remove("RUST_LOG")
        .env("FUNDBENCH_SCREENING__MIN_AUM", "-5")
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.starts_with("Error:"));
    assert!(message.contains("min_aum"));
}

#[test]
fn test_validate_json() {
    let output = fundbench(&["--format", "json", "validate"]);
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["valid"], true);
    assert_eq!(summary["min_aum"], 100_000_000);
    let periods = serde_json::json!(["1Y", "3Y", "5Y", "10Y"]);
    assert_eq!(summary["return_periods"], periods);
}

#[test]
fn test_export_benchmarks_csv() {
    let output = fundbench(&["export", "benchmarks", "--to", "csv"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "key,name,ticker\n\
         us_equity,US Equity,ITOT\n\
         intl_developed,Intl Developed,IEFA\n\
         emerging,Emerging Markets,IEMG\n\
         us_bonds,US Bonds,AGG\n"
    );
}

#[test]
fn test_export_unknown_format_fails() {
    let output = fundbench(&["export", "categories", "--to", "xml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid format: xml"));
}
