#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundbench/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod benchmark;
pub mod error;
pub mod period;
pub mod registry;
pub mod settings;
pub mod tables;

pub use benchmark::{BenchmarkKey, Ticker};
pub use error::{RegistryError, Result};
pub use period::ReturnPeriod;
pub use registry::{Registry, RegistryBuilder, normalize_category};
pub use settings::{ScreeningSettings, Settings, default_config_path};
pub use tables::{
    ASSET_CLASS_TO_BENCHMARK, BENCHMARKS, MIN_AUM, MIN_TRACK_RECORD_YEARS, RETURN_PERIODS,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
