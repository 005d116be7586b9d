//! Error types for registry construction and configuration loading.

use crate::{benchmark::BenchmarkKey, period::ReturnPeriod};
use thiserror::Error;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while building or loading a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A benchmark key that is not one of the four registry keys.
    #[error("Unknown benchmark key: {0:?}")]
    UnknownBenchmark(String),

    /// Ticker failed validation
    #[error("Invalid ticker {ticker:?}: {reason}")]
    InvalidTicker {
        /// The rejected ticker text
        ticker: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// The same ticker was assigned to two benchmarks
    #[error("Ticker {ticker} is assigned to both {first} and {second}")]
    DuplicateTicker {
        /// Offending ticker
        ticker: String,
        /// Benchmark that had the ticker first
        first: BenchmarkKey,
        /// Benchmark that repeated it
        second: BenchmarkKey,
    },

    /// A screening threshold below zero
    #[error("Threshold {name} must be non-negative, got {value}")]
    NegativeThreshold {
        /// Threshold name
        name: &'static str,
        /// Value supplied
        value: i64,
    },

    /// A screening threshold too large for its type
    #[error("Threshold {name} is out of range: {value}")]
    ThresholdOutOfRange {
        /// Threshold name
        name: &'static str,
        /// Value supplied
        value: i64,
    },

    /// Return-period label not in the catalog
    #[error("Unknown return period: {0:?}")]
    UnknownReturnPeriod(String),

    /// Return-period label listed twice
    #[error("Duplicate return period: {0}")]
    DuplicateReturnPeriod(ReturnPeriod),

    /// No return periods configured
    #[error("Return period list is empty")]
    EmptyReturnPeriods,

    /// Blank category label
    #[error("Category label is empty")]
    EmptyCategory,

    /// Two spellings of one category label point at different benchmarks
    #[error("Category {category:?} maps to both {existing} and {new}")]
    ConflictingCategory {
        /// Category label
        category: String,
        /// Benchmark already assigned
        existing: BenchmarkKey,
        /// Benchmark in the later entry
        new: BenchmarkKey,
    },

    /// Configuration source error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
