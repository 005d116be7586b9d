//! Layered registry configuration.
//!
//! Sources, later ones winning:
//!
//! 1. the compiled-in tables,
//! 2. a TOML file (an explicit path, or `<config dir>/fundbench/config.toml`),
//! 3. `FUNDBENCH_*` environment variables, with `__` between nested keys
//!    (`FUNDBENCH_SCREENING__MIN_AUM=50000000`).
//!
//! ```toml
//! return_periods = ["1Y", "3Y", "5Y", "10Y"]
//!
//! [benchmarks]
//! us_equity = "VTI"
//!
//! [categories]
//! "Target-Date 2040" = "us_equity"
//!
//! [screening]
//! min_aum = 100000000
//! min_track_record_years = 3
//! ```

use crate::{
    error::{RegistryError, Result},
    period::ReturnPeriod,
    registry::{Registry, RegistryBuilder},
};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "FUNDBENCH";

/// Default configuration location, `<config dir>/fundbench/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fundbench").join("config.toml"))
}

/// Raw configuration, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Benchmark key to ticker overrides.
    pub benchmarks: BTreeMap<String, String>,

    /// Category label to benchmark key, added to or replacing builtin labels.
    pub categories: BTreeMap<String, String>,

    /// Screening thresholds.
    pub screening: ScreeningSettings,

    /// Replacement return-period list.
    pub return_periods: Option<Vec<String>>,
}

/// Screening thresholds as written in configuration.
///
/// Signed so that negative values are reported as such instead of failing
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningSettings {
    /// Minimum AUM in USD.
    pub min_aum: Option<i64>,

    /// Minimum track record in years.
    pub min_track_record_years: Option<i64>,
}

impl Settings {
    /// Load settings from `path` (or the default location when `None`) and
    /// the environment.
    ///
    /// An explicit path must exist. The default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(default) = default_config_path() {
                    debug!(path = %default.display(), "checking default configuration file");
                    builder = builder.add_source(
                        File::from(default).format(FileFormat::Toml).required(false),
                    );
                }
            }
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("return_periods"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Parse settings from TOML text, without consulting the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Apply these settings to the builtin tables.
    pub fn into_registry(self) -> Result<Registry> {
        let mut builder = RegistryBuilder::new();

        for (key, ticker) in self.benchmarks {
            builder = builder.raw_ticker(key, ticker);
        }
        for (label, key) in self.categories {
            builder = builder.raw_category(label, key);
        }

        if let Some(min_aum) = self.screening.min_aum {
            builder = builder.min_aum(non_negative("min_aum", min_aum)?);
        }
        if let Some(value) = self.screening.min_track_record_years {
            let years = non_negative("min_track_record_years", value)?;
            let years = u32::try_from(years).map_err(|_| RegistryError::ThresholdOutOfRange {
                name: "min_track_record_years",
                value,
            })?;
            builder = builder.min_track_record_years(years);
        }

        if let Some(labels) = self.return_periods {
            let periods = labels
                .iter()
                .map(|label| label.parse::<ReturnPeriod>())
                .collect::<Result<Vec<_>>>()?;
            builder = builder.return_periods(periods);
        }

        builder.build()
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| RegistryError::NegativeThreshold { name, value })
}
