//! Category classification with a caller-chosen policy for unknown labels.
//!
//! The registry only answers "which benchmark, if any". What to do with a
//! miss is decided here by [`UnmappedPolicy`].

use crate::fund::Fund;
use fundbench_registry::{BenchmarkKey, Registry, Ticker};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// What to do with a fund whose category is missing or not in the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Leave the fund unclassified for manual review.
    #[default]
    Flag,

    /// Assign a default benchmark.
    Fallback(BenchmarkKey),
}

/// Result of classifying one category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "benchmark", rename_all = "snake_case")]
pub enum Classification {
    /// Found in the category map.
    Mapped(BenchmarkKey),

    /// Not found; the fallback benchmark was applied.
    Fallback(BenchmarkKey),

    /// Not found; needs manual classification.
    Unclassified,
}

impl Classification {
    /// The benchmark assigned, if any.
    pub const fn benchmark(&self) -> Option<BenchmarkKey> {
        match self {
            Self::Mapped(key) | Self::Fallback(key) => Some(*key),
            Self::Unclassified => None,
        }
    }

    /// Whether the label was found in the map.
    pub const fn is_mapped(&self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

/// Classifies category labels against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    registry: &'a Registry,
    policy: UnmappedPolicy,
}

impl<'a> Classifier<'a> {
    /// Create a classifier.
    pub const fn new(registry: &'a Registry, policy: UnmappedPolicy) -> Self {
        Self { registry, policy }
    }

    /// The registry consulted.
    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// The miss policy.
    pub const fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    /// Classify a label. A missing label is treated as a miss.
    pub fn classify(&self, label: Option<&str>) -> Classification {
        if let Some(key) = label.and_then(|l| self.registry.benchmark_for_category(l)) {
            return Classification::Mapped(key);
        }

        debug!(category = label.unwrap_or("<none>"), policy = ?self.policy, "unmapped category");
        match self.policy {
            UnmappedPolicy::Flag => Classification::Unclassified,
            UnmappedPolicy::Fallback(key) => Classification::Fallback(key),
        }
    }

    /// Classify a fund by its category.
    pub fn classify_fund(&self, fund: &Fund) -> Classification {
        self.classify(fund.category.as_deref())
    }

    /// Classify every fund.
    pub fn classify_all<'f>(
        &self,
        funds: impl IntoIterator<Item = &'f Fund>,
    ) -> ClassificationReport {
        let results: Vec<_> = funds
            .into_iter()
            .map(|fund| (fund.ticker.clone(), self.classify_fund(fund)))
            .collect();
        ClassificationReport { results }
    }
}

/// Per-fund classifications, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Fund ticker and its classification.
    pub results: Vec<(Ticker, Classification)>,
}

impl ClassificationReport {
    /// Classification for a ticker.
    pub fn get(&self, ticker: &str) -> Option<Classification> {
        self.results
            .iter()
            .find(|(t, _)| t == ticker)
            .map(|(_, c)| *c)
    }

    /// Tickers that need manual classification.
    pub fn flagged(&self) -> Vec<&Ticker> {
        self.results
            .iter()
            .filter(|(_, c)| *c == Classification::Unclassified)
            .map(|(t, _)| t)
            .collect()
    }

    /// Tickers that received the fallback benchmark.
    pub fn fallbacks(&self) -> Vec<&Ticker> {
        self.results
            .iter()
            .filter(|(_, c)| matches!(c, Classification::Fallback(_)))
            .map(|(t, _)| t)
            .collect()
    }

    /// Number of funds assigned to each benchmark, mapped or by fallback.
    pub fn counts(&self) -> BTreeMap<BenchmarkKey, usize> {
        let mut counts = BTreeMap::new();
        for key in self.results.iter().filter_map(|(_, c)| c.benchmark()) {
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }
}
