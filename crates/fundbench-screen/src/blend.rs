//! Blended benchmarks for a portfolio.
//!
//! Holding weights are summed per benchmark according to each fund's
//! classification, and the benchmark returns are blended with those weights.

use crate::{
    classify::Classifier,
    error::{Result, ScreenError},
    fund::{Fund, Holding, TrailingReturns},
};
use fundbench_registry::{BenchmarkKey, Registry, ReturnPeriod};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Portfolio weight assigned to each benchmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BenchmarkWeights {
    weights: [f64; BenchmarkKey::COUNT],
    unmapped: f64,
}

impl BenchmarkWeights {
    /// Weight for `key`, or `None` when the portfolio has no exposure.
    pub fn get(&self, key: BenchmarkKey) -> Option<f64> {
        let weight = self.weights[key.index()];
        (weight > 0.0).then_some(weight)
    }

    /// Benchmarks with positive weight, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (BenchmarkKey, f64)> + '_ {
        BenchmarkKey::all()
            .into_iter()
            .filter_map(|key| self.get(key).map(|w| (key, w)))
    }

    /// Sum of benchmark weights.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    /// Weight of holdings that could not be mapped, before normalization.
    pub const fn unmapped(&self) -> f64 {
        self.unmapped
    }

    /// Whether no benchmark has weight.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Sum holding weights per benchmark.
///
/// Holdings with no matching fund row are ignored. Holdings whose fund is
/// unclassified count toward [`BenchmarkWeights::unmapped`]. When the mapped
/// total is strictly between 0 and 1 the benchmark weights are rescaled to
/// sum to 1.
pub fn benchmark_weights(
    holdings: &[Holding],
    funds: &[Fund],
    classifier: &Classifier<'_>,
) -> Result<BenchmarkWeights> {
    let by_ticker: HashMap<&str, &Fund> = funds.iter().map(|f| (f.ticker.as_str(), f)).collect();
    let mut blend = BenchmarkWeights::default();

    for holding in holdings {
        if !holding.weight.is_finite() || holding.weight < 0.0 {
            return Err(ScreenError::InvalidWeight {
                ticker: holding.ticker.to_string(),
                weight: holding.weight,
            });
        }

        let Some(fund) = by_ticker.get(holding.ticker.as_str()) else {
            warn!(ticker = %holding.ticker, "holding has no fund data, ignored");
            continue;
        };

        match classifier.classify_fund(fund).benchmark() {
            Some(key) => blend.weights[key.index()] += holding.weight,
            None => blend.unmapped += holding.weight,
        }
    }

    let total: f64 = blend.weights.iter().sum();
    if total > 0.0 && total < 1.0 {
        let scale = 1.0 / total;
        debug!(total, scale, "rescaling benchmark weights");
        for weight in &mut blend.weights {
            *weight *= scale;
        }
    }

    Ok(blend)
}

/// Blended benchmark return for each registry period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlendedReturns {
    values: Vec<(ReturnPeriod, f64)>,
}

impl BlendedReturns {
    /// Blended return for `period`.
    pub fn get(&self, period: ReturnPeriod) -> Option<f64> {
        self.values
            .iter()
            .find(|(p, _)| *p == period)
            .map(|(_, v)| *v)
    }

    /// Periods and returns, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (ReturnPeriod, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Blend the benchmark funds' trailing returns with `weights`.
///
/// Benchmark rows are found in `benchmark_funds` by the registry ticker. A
/// missing row or a missing return contributes nothing to that period.
pub fn blended_returns(
    weights: &BenchmarkWeights,
    registry: &Registry,
    benchmark_funds: &[Fund],
) -> BlendedReturns {
    let rows: Vec<(f64, Option<&Fund>)> = weights
        .iter()
        .map(|(key, weight)| {
            let ticker = registry.ticker(key);
            let row = benchmark_funds.iter().find(|f| &f.ticker == ticker);
            if row.is_none() {
                warn!(benchmark = %key, %ticker, "no return data for benchmark");
            }
            (weight, row)
        })
        .collect();

    let values = registry
        .return_periods()
        .iter()
        .map(|&period| {
            let blended = rows
                .iter()
                .filter_map(|(w, row)| row.and_then(|f| f.trailing_return(period)).map(|r| w * r))
                .sum::<f64>();
            (period, blended)
        })
        .collect::<Vec<_>>();

    BlendedReturns { values }
}

/// Holding-weighted average of the funds' trailing returns.
///
/// For each period only holdings with a recorded return are averaged; a
/// period with none stays unset.
pub fn portfolio_returns(
    holdings: &[Holding],
    funds: &[Fund],
    periods: &[ReturnPeriod],
) -> TrailingReturns {
    let by_ticker: HashMap<&str, &Fund> = funds.iter().map(|f| (f.ticker.as_str(), f)).collect();
    let mut returns = TrailingReturns::new();

    for &period in periods {
        let (weighted, weight) = holdings
            .iter()
            .filter_map(|h| {
                let r = by_ticker.get(h.ticker.as_str())?.trailing_return(period)?;
                Some((h.weight * r, h.weight))
            })
            .fold((0.0, 0.0), |(acc_r, acc_w), (r, w)| (acc_r + r, acc_w + w));

        if weight > 0.0 {
            returns.set(period, Some(weighted / weight));
        }
    }

    returns
}

/// Portfolio return minus blended benchmark return, per benchmark period.
pub fn excess_returns(
    portfolio: &TrailingReturns,
    benchmark: &BlendedReturns,
) -> Vec<(ReturnPeriod, Option<f64>)> {
    benchmark
        .iter()
        .map(|(period, b)| (period, portfolio.get(period).map(|p| p - b)))
        .collect()
}
