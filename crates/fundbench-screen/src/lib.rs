#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundbench/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod blend;
pub mod classify;
pub mod error;
pub mod export;
pub mod fund;
pub mod screen;

pub use blend::{
    BenchmarkWeights, BlendedReturns, benchmark_weights, blended_returns, excess_returns,
    portfolio_returns,
};
pub use classify::{Classification, ClassificationReport, Classifier, UnmappedPolicy};
pub use error::{Result, ScreenError};
pub use export::{BenchmarkRow, CategoryRow, ExportError, ExportFormat, Exporter, ScreenRow};
pub use fund::{Fund, Holding, TrailingReturns};
pub use screen::{RejectedFund, Rejection, ScreenCriteria, ScreenReport, screen, screen_fund};
