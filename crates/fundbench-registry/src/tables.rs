//! Builtin benchmark, threshold and category tables.
//!
//! These are the compiled-in defaults. [`Registry::global`](crate::Registry::global)
//! serves them as-is and [`RegistryBuilder`](crate::RegistryBuilder) starts from them.

use crate::{
    benchmark::BenchmarkKey::{self, Emerging, IntlDeveloped, UsBonds, UsEquity},
    period::ReturnPeriod,
};

/// Benchmark ETF for each asset-class key, in key order.
pub const BENCHMARKS: [(BenchmarkKey, &str); BenchmarkKey::COUNT] = [
    (BenchmarkKey::UsEquity, "ITOT"),
    (BenchmarkKey::IntlDeveloped, "IEFA"),
    (BenchmarkKey::Emerging, "IEMG"),
    (BenchmarkKey::UsBonds, "AGG"),
];

/// Minimum assets under management, in USD.
pub const MIN_AUM: u64 = 100_000_000;

/// Minimum fund age, in whole years.
pub const MIN_TRACK_RECORD_YEARS: u32 = 3;

/// Trailing-return periods reported for every fund and benchmark.
pub const RETURN_PERIODS: [ReturnPeriod; 4] = [
    ReturnPeriod::OneYear,
    ReturnPeriod::ThreeYear,
    ReturnPeriod::FiveYear,
    ReturnPeriod::TenYear,
];

/// Fund category label to benchmark key.
pub const ASSET_CLASS_TO_BENCHMARK: &[(&str, BenchmarkKey)] = &[
    // US equity, Morningstar style boxes
    ("Large Blend", UsEquity),
    ("Large Growth", UsEquity),
    ("Large Value", UsEquity),
    ("Mid-Cap Blend", UsEquity),
    ("Mid-Cap Growth", UsEquity),
    ("Mid-Cap Value", UsEquity),
    ("Small Blend", UsEquity),
    ("Small Growth", UsEquity),
    ("Small Value", UsEquity),
    // US equity, ETF provider spellings
    ("Large Cap Blend", UsEquity),
    ("Large Cap Growth", UsEquity),
    ("Large Cap Value", UsEquity),
    ("Mid Cap Blend", UsEquity),
    ("Mid Cap Growth", UsEquity),
    ("Mid Cap Value", UsEquity),
    ("Small Cap Blend", UsEquity),
    ("Small Cap Growth", UsEquity),
    ("Small Cap Value", UsEquity),
    ("Total Market", UsEquity),
    ("Dividend", UsEquity),
    ("US Equity", UsEquity),
    // International developed
    ("Foreign Large Blend", IntlDeveloped),
    ("Foreign Large Growth", IntlDeveloped),
    ("Foreign Large Value", IntlDeveloped),
    ("Foreign Small/Mid Blend", IntlDeveloped),
    ("Foreign Small/Mid Growth", IntlDeveloped),
    ("Foreign Small/Mid Value", IntlDeveloped),
    ("Europe Stock", IntlDeveloped),
    ("Japan Stock", IntlDeveloped),
    ("Developed Markets", IntlDeveloped),
    ("Intl Developed", IntlDeveloped),
    // Emerging markets
    ("Diversified Emerging Mkts", Emerging),
    ("Emerging Markets", Emerging),
    ("China Region", Emerging),
    ("India Equity", Emerging),
    ("Latin America Stock", Emerging),
    // US investment-grade bonds
    ("Intermediate Core Bond", UsBonds),
    ("Intermediate Core-Plus Bond", UsBonds),
    ("Intermediate Government", UsBonds),
    ("Short-Term Bond", UsBonds),
    ("Short Government", UsBonds),
    ("Long-Term Bond", UsBonds),
    ("Long Government", UsBonds),
    ("Corporate Bond", UsBonds),
    ("Inflation-Protected Bond", UsBonds),
    ("Ultrashort Bond", UsBonds),
    ("Total Bond", UsBonds),
    ("US Bonds", UsBonds),
];
