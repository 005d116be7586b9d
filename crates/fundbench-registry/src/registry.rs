//! The validated, read-only benchmark registry.
//!
//! A [`Registry`] holds the four benchmark tickers, the category map, the
//! screening thresholds and the return-period list. Once built it is never
//! mutated, so a shared `&Registry` can be read from any number of threads.

use crate::{
    benchmark::{BenchmarkKey, Ticker},
    error::{RegistryError, Result},
    period::ReturnPeriod,
    tables::{
        ASSET_CLASS_TO_BENCHMARK, BENCHMARKS, MIN_AUM, MIN_TRACK_RECORD_YEARS, RETURN_PERIODS,
    },
};
use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};
use tracing::debug;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::builtin);

/// Canonical form used for category lookups: trimmed, single-spaced, lower-case.
pub fn normalize_category(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Benchmark tickers, category map, screening thresholds and return periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    tickers: [Ticker; BenchmarkKey::COUNT],
    categories: Vec<(String, BenchmarkKey)>,
    category_index: HashMap<String, BenchmarkKey>,
    min_aum: u64,
    min_track_record_years: u32,
    return_periods: Vec<ReturnPeriod>,
}

impl Registry {
    /// Process-wide registry built from the compiled-in tables.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// A fresh registry holding the compiled-in tables.
    pub fn builtin() -> Self {
        Self::from_parts(
            BENCHMARKS.map(|(_, ticker)| Ticker::builtin(ticker)),
            ASSET_CLASS_TO_BENCHMARK
                .iter()
                .map(|(label, key)| ((*label).to_string(), *key))
                .collect(),
            MIN_AUM,
            MIN_TRACK_RECORD_YEARS,
            RETURN_PERIODS.to_vec(),
        )
    }

    /// Start a builder seeded with the compiled-in tables.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    fn from_parts(
        tickers: [Ticker; BenchmarkKey::COUNT],
        categories: Vec<(String, BenchmarkKey)>,
        min_aum: u64,
        min_track_record_years: u32,
        return_periods: Vec<ReturnPeriod>,
    ) -> Self {
        let category_index = categories
            .iter()
            .map(|(label, key)| (normalize_category(label), *key))
            .collect();

        Self {
            tickers,
            categories,
            category_index,
            min_aum,
            min_track_record_years,
            return_periods,
        }
    }

    /// Ticker of the benchmark for `key`.
    pub fn ticker(&self, key: BenchmarkKey) -> &Ticker {
        &self.tickers[key.index()]
    }

    /// All benchmarks in key order.
    pub fn benchmarks(&self) -> impl Iterator<Item = (BenchmarkKey, &Ticker)> + '_ {
        BenchmarkKey::all()
            .into_iter()
            .map(move |key| (key, self.ticker(key)))
    }

    /// Benchmark key for a fund category label.
    ///
    /// Matching ignores case and surrounding or repeated whitespace. An
    /// unrecognised label returns `None`.
    pub fn benchmark_for_category(&self, label: &str) -> Option<BenchmarkKey> {
        let found = self.category_index.get(&normalize_category(label)).copied();
        if found.is_none() {
            debug!(category = label, "category not in benchmark map");
        }
        found
    }

    /// Benchmark ticker for a fund category label.
    pub fn ticker_for_category(&self, label: &str) -> Option<&Ticker> {
        self.benchmark_for_category(label)
            .map(|key| self.ticker(key))
    }

    /// Benchmark key whose ticker is `ticker` (case-insensitive).
    pub fn key_for_ticker(&self, ticker: &str) -> Option<BenchmarkKey> {
        let ticker = ticker.trim();
        self.benchmarks()
            .find(|(_, t)| t.as_str().eq_ignore_ascii_case(ticker))
            .map(|(key, _)| key)
    }

    /// Category labels in table order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, BenchmarkKey)> + '_ {
        self.categories
            .iter()
            .map(|(label, key)| (label.as_str(), *key))
    }

    /// Category labels that map to `key`.
    pub fn categories_for(&self, key: BenchmarkKey) -> Vec<&str> {
        self.categories()
            .filter(|(_, k)| *k == key)
            .map(|(label, _)| label)
            .collect()
    }

    /// Number of category labels.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Minimum assets under management, in USD.
    pub const fn min_aum(&self) -> u64 {
        self.min_aum
    }

    /// Minimum fund age, in whole years.
    pub const fn min_track_record_years(&self) -> u32 {
        self.min_track_record_years
    }

    /// Return periods, in configured order.
    pub fn return_periods(&self) -> &[ReturnPeriod] {
        &self.return_periods
    }

    /// Check the registry invariants.
    ///
    /// Category values are [`BenchmarkKey`]s and the thresholds are unsigned,
    /// so referential integrity and non-negativity hold by construction. The
    /// remaining rules are checked here.
    pub fn validate(&self) -> Result<()> {
        let mut seen_tickers: HashMap<&str, BenchmarkKey> = HashMap::new();
        for (key, ticker) in self.benchmarks() {
            if let Some(first) = seen_tickers.insert(ticker.as_str(), key) {
                return Err(RegistryError::DuplicateTicker {
                    ticker: ticker.to_string(),
                    first,
                    second: key,
                });
            }
        }

        let mut seen_categories: HashMap<String, BenchmarkKey> = HashMap::new();
        for (label, key) in self.categories() {
            let normalized = normalize_category(label);
            if normalized.is_empty() {
                return Err(RegistryError::EmptyCategory);
            }
            if let Some(existing) = seen_categories.insert(normalized, key) {
                if existing != key {
                    return Err(RegistryError::ConflictingCategory {
                        category: label.to_string(),
                        existing,
                        new: key,
                    });
                }
            }
        }

        if self.return_periods.is_empty() {
            return Err(RegistryError::EmptyReturnPeriods);
        }
        let mut seen_periods = HashSet::new();
        for period in &self.return_periods {
            if !seen_periods.insert(*period) {
                return Err(RegistryError::DuplicateReturnPeriod(*period));
            }
        }

        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builds a [`Registry`] from the compiled-in tables plus overrides.
///
/// Keys and tickers are kept as text until [`build`](Self::build), so values
/// read from configuration and typed values go through the same checks.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    ticker_overrides: Vec<(String, String)>,
    category_overrides: Vec<(String, String)>,
    clear_categories: bool,
    min_aum: Option<u64>,
    min_track_record_years: Option<u32>,
    return_periods: Option<Vec<ReturnPeriod>>,
}

impl RegistryBuilder {
    /// Create a builder seeded with the compiled-in tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ticker for a benchmark.
    pub fn ticker(self, key: BenchmarkKey, ticker: impl Into<String>) -> Self {
        self.raw_ticker(key.as_str(), ticker)
    }

    /// Replace the ticker for a benchmark given by its text key.
    pub fn raw_ticker(mut self, key: impl Into<String>, ticker: impl Into<String>) -> Self {
        self.ticker_overrides.push((key.into(), ticker.into()));
        self
    }

    /// Add a category label, or re-point an existing one.
    pub fn category(self, label: impl Into<String>, key: BenchmarkKey) -> Self {
        self.raw_category(label, key.as_str())
    }

    /// Add a category label whose benchmark is given by its text key.
    pub fn raw_category(mut self, label: impl Into<String>, key: impl Into<String>) -> Self {
        self.category_overrides.push((label.into(), key.into()));
        self
    }

    /// Drop the compiled-in category map, keeping only labels added here.
    pub const fn without_builtin_categories(mut self) -> Self {
        self.clear_categories = true;
        self
    }

    /// Replace the minimum AUM.
    pub const fn min_aum(mut self, min_aum: u64) -> Self {
        self.min_aum = Some(min_aum);
        self
    }

    /// Replace the minimum track record.
    pub const fn min_track_record_years(mut self, years: u32) -> Self {
        self.min_track_record_years = Some(years);
        self
    }

    /// Replace the return-period list.
    pub fn return_periods(mut self, periods: impl IntoIterator<Item = ReturnPeriod>) -> Self {
        self.return_periods = Some(periods.into_iter().collect());
        self
    }

    /// Resolve overrides and validate the result.
    pub fn build(self) -> Result<Registry> {
        let base = Registry::builtin();

        let mut tickers = base.tickers;
        for (key, ticker) in &self.ticker_overrides {
            let key: BenchmarkKey = key.parse()?;
            let ticker = Ticker::new(ticker)?;
            debug!(benchmark = %key, %ticker, "benchmark ticker override");
            tickers[key.index()] = ticker;
        }

        let mut categories = if self.clear_categories {
            Vec::new()
        } else {
            base.categories
        };
        let mut overridden: HashMap<String, BenchmarkKey> = HashMap::new();
        for (label, key) in &self.category_overrides {
            let label = label.trim();
            let normalized = normalize_category(label);
            if normalized.is_empty() {
                return Err(RegistryError::EmptyCategory);
            }
            let key: BenchmarkKey = key.parse()?;

            if let Some(&existing) = overridden.get(&normalized) {
                if existing != key {
                    return Err(RegistryError::ConflictingCategory {
                        category: label.to_string(),
                        existing,
                        new: key,
                    });
                }
            }
            overridden.insert(normalized.clone(), key);

            match categories
                .iter_mut()
                .find(|(l, _)| normalize_category(l) == normalized)
            {
                Some(entry) => {
                    debug!(category = label, from = %entry.1, to = %key, "category re-pointed");
                    entry.1 = key;
                }
                None => categories.push((label.to_string(), key)),
            }
        }

        let registry = Registry::from_parts(
            tickers,
            categories,
            self.min_aum.unwrap_or(base.min_aum),
            self.min_track_record_years
                .unwrap_or(base.min_track_record_years),
            self.return_periods.unwrap_or(base.return_periods),
        );
        registry.validate()?;
        Ok(registry)
    }
}
