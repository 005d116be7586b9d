//! CSV and JSON export of registry tables and screening results.

use crate::screen::ScreenReport;
use fundbench_registry::{BenchmarkKey, Registry};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Write, path::Path, str::FromStr};
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" | "pretty" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

/// One benchmark of the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkRow {
    /// Registry key.
    pub key: BenchmarkKey,
    /// Display name.
    pub name: String,
    /// Benchmark ticker.
    pub ticker: String,
}

impl BenchmarkRow {
    /// All benchmarks of `registry`, in key order.
    pub fn from_registry(registry: &Registry) -> Vec<Self> {
        registry
            .benchmarks()
            .map(|(key, ticker)| Self {
                key,
                name: key.name().to_string(),
                ticker: ticker.to_string(),
            })
            .collect()
    }
}

/// One category mapping of the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRow {
    /// Category label.
    pub category: String,
    /// Benchmark key it maps to.
    pub benchmark_key: BenchmarkKey,
    /// Ticker of that benchmark.
    pub ticker: String,
}

impl CategoryRow {
    /// Category mappings of `registry`, optionally for one benchmark only.
    pub fn from_registry(registry: &Registry, only: Option<BenchmarkKey>) -> Vec<Self> {
        registry
            .categories()
            .filter(|(_, key)| only.is_none_or(|o| o == *key))
            .map(|(category, key)| Self {
                category: category.to_string(),
                benchmark_key: key,
                ticker: registry.ticker(key).to_string(),
            })
            .collect()
    }
}

/// Screening outcome for one fund.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenRow {
    /// Fund ticker.
    pub ticker: String,
    /// Whether the fund passed.
    pub passed: bool,
    /// Failed rules, `; `-separated.
    pub reasons: String,
}

impl ScreenRow {
    /// Rows for a report: passed funds first, then rejected, each in input order.
    pub fn from_report(report: &ScreenReport) -> Vec<Self> {
        let passed = report.passed.iter().map(|f| Self {
            ticker: f.ticker.to_string(),
            passed: true,
            reasons: String::new(),
        });
        let rejected = report.rejected.iter().map(|r| Self {
            ticker: r.fund.ticker.to_string(),
            passed: false,
            reasons: r
                .reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        });
        passed.chain(rejected).collect()
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn export_to_writer(
        &self,
        writer: &mut dyn Write,
        format: ExportFormat,
    ) -> Result<(), ExportError> {
        writer.write_all(self.export_to_string(format)?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let mut file = File::create(path)?;
        self.export_to_writer(&mut file, format)
    }
}

fn rows_to_string<T: Serialize>(rows: &[T], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            for row in rows {
                wtr.serialize(row)?;
            }
            let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
        ExportFormat::Json => Ok(serde_json::to_string(rows)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(rows)?),
    }
}

impl Exporter for Vec<BenchmarkRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        rows_to_string(self, format)
    }
}

impl Exporter for Vec<CategoryRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        rows_to_string(self, format)
    }
}

impl Exporter for Vec<ScreenRow> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        rows_to_string(self, format)
    }
}
