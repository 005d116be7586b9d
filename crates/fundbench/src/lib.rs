#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundbench/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export main types from sub-crates
pub use fundbench_registry as registry;
pub use fundbench_screen as screen;

// Re-export common types
pub use registry::{BenchmarkKey, Registry, RegistryBuilder, ReturnPeriod, Settings, Ticker};
pub use screen::{
    Classification, Classifier, Fund, Holding, ScreenCriteria, ScreenReport, UnmappedPolicy,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
