//! Error types for fund loading and portfolio operations.

use fundbench_registry::RegistryError;
use thiserror::Error;

/// Result type for screening operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Errors that can occur while loading funds or blending benchmarks.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry or ticker error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Holding weight that is negative or not finite
    #[error("Invalid weight {weight} for {ticker}")]
    InvalidWeight {
        /// Holding ticker
        ticker: String,
        /// Weight supplied
        weight: f64,
    },

    /// File extension with no loader
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}
