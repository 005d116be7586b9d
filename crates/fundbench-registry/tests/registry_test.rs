//! Integration tests for the builtin tables and configuration loading.

use fundbench_registry::{
    ASSET_CLASS_TO_BENCHMARK, BENCHMARKS, BenchmarkKey, MIN_AUM, MIN_TRACK_RECORD_YEARS,
    RETURN_PERIODS, Registry, RegistryError, Settings,
};
use std::collections::HashSet;
use std::io::Write;

#[test]
fn test_referential_integrity() {
    let keys: HashSet<&str> = BENCHMARKS.iter().map(|(k, _)| k.as_str()).collect();
    for (label, key) in ASSET_CLASS_TO_BENCHMARK {
        assert!(keys.contains(key.as_str()), "{label} -> {key}");
    }

    let registry = Registry::global();
    for (label, key) in registry.categories() {
        assert_eq!(registry.benchmark_for_category(label), Some(key));
    }
}

#[test]
fn test_table_shapes() {
    assert_eq!(BENCHMARKS.len(), 4);
    let unique: HashSet<_> = RETURN_PERIODS.iter().collect();
    assert_eq!(unique.len(), RETURN_PERIODS.len());
    // Unsigned types; the assertions document the thresholds.
    assert!(MIN_AUM > 0);
    assert!(MIN_TRACK_RECORD_YEARS > 0);
}

#[test]
fn test_documented_lookups() {
    let registry = Registry::global();

    let key = registry.benchmark_for_category("Large Blend").unwrap();
    assert_eq!(key.as_str(), "us_equity");
    assert_eq!(registry.ticker(key).as_str(), "ITOT");

    let key = registry.benchmark_for_category("Emerging Markets").unwrap();
    assert_eq!(key.as_str(), "emerging");
    assert_eq!(registry.ticker(key).as_str(), "IEMG");

    assert_eq!(registry.benchmark_for_category("Commodities"), None);
}

#[test]
fn test_benchmark_listing() {
    let tickers: Vec<String> = Registry::global()
        .benchmarks()
        .map(|(_, t)| t.to_string())
        .collect();
    assert_eq!(tickers, ["ITOT", "IEFA", "IEMG", "AGG"]);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[benchmarks]
us_equity = "VTI"

[categories]
balanced = "us_bonds"

[screening]
min_aum = 1000
"#
    )
    .unwrap();

    let registry = Settings::load(Some(file.path()))
        .unwrap()
        .into_registry()
        .unwrap();

    assert_eq!(registry.ticker(BenchmarkKey::UsEquity).as_str(), "VTI");
    assert_eq!(
        registry.benchmark_for_category("Balanced"),
        Some(BenchmarkKey::UsBonds)
    );
    assert_eq!(registry.min_aum(), 1000);
    assert_eq!(registry.min_track_record_years(), MIN_TRACK_RECORD_YEARS);
}

#[test]
fn test_load_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = Settings::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, RegistryError::Config(_)));
}

#[test]
fn test_load_rejects_bad_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[screening]\nmin_track_record_years = -2").unwrap();

    let err = Settings::load(Some(file.path()))
        .unwrap()
        .into_registry()
        .unwrap_err();
    assert!(matches!(err, RegistryError::NegativeThreshold { .. }));
}
