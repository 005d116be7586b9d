//! Fund screening against minimum AUM and minimum track record.

use crate::fund::Fund;
use chrono::NaiveDate;
use fundbench_registry::Registry;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Screening thresholds and the date track records are measured to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenCriteria {
    /// Minimum AUM, USD. Zero disables the AUM rule.
    pub min_aum: u64,

    /// Minimum track record, years. Zero disables the track-record rule.
    pub min_track_record_years: u32,

    /// Evaluation date.
    pub as_of: NaiveDate,
}

impl ScreenCriteria {
    /// Criteria with the registry's thresholds.
    pub const fn from_registry(registry: &Registry, as_of: NaiveDate) -> Self {
        Self {
            min_aum: registry.min_aum(),
            min_track_record_years: registry.min_track_record_years(),
            as_of,
        }
    }
}

/// Why a fund failed screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rejection {
    /// AUM below the minimum
    AumBelowMinimum {
        /// Fund AUM
        aum: f64,
        /// Required minimum
        minimum: u64,
    },

    /// No AUM on record
    MissingAum,

    /// Track record shorter than the minimum
    TrackRecordTooShort {
        /// Whole years since inception
        years: u32,
        /// Required minimum
        minimum: u32,
    },

    /// No inception date on record
    MissingInceptionDate,

    /// Inception date later than the evaluation date
    InceptionAfterAsOf {
        /// Fund inception date
        inception: NaiveDate,
        /// Evaluation date
        as_of: NaiveDate,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AumBelowMinimum { aum, minimum } => {
                write!(f, "AUM ${aum:.0} below minimum ${minimum}")
            }
            Self::MissingAum => write!(f, "AUM unknown"),
            Self::TrackRecordTooShort { years, minimum } => {
                write!(f, "track record {years}y below minimum {minimum}y")
            }
            Self::MissingInceptionDate => write!(f, "inception date unknown"),
            Self::InceptionAfterAsOf { inception, as_of } => {
                write!(f, "inception {inception} is after evaluation date {as_of}")
            }
        }
    }
}

/// Check one fund. Every failed rule is reported.
pub fn screen_fund(fund: &Fund, criteria: &ScreenCriteria) -> Result<(), Vec<Rejection>> {
    let mut reasons = Vec::new();

    if criteria.min_aum > 0 {
        match fund.aum {
            Some(aum) if aum >= criteria.min_aum as f64 => {}
            Some(aum) => reasons.push(Rejection::AumBelowMinimum {
                aum,
                minimum: criteria.min_aum,
            }),
            None => reasons.push(Rejection::MissingAum),
        }
    }

    if criteria.min_track_record_years > 0 {
        match fund.inception_date {
            None => reasons.push(Rejection::MissingInceptionDate),
            Some(inception) => match fund.track_record_years(criteria.as_of) {
                Some(years) if years >= criteria.min_track_record_years => {}
                Some(years) => reasons.push(Rejection::TrackRecordTooShort {
                    years,
                    minimum: criteria.min_track_record_years,
                }),
                None => reasons.push(Rejection::InceptionAfterAsOf {
                    inception,
                    as_of: criteria.as_of,
                }),
            },
        }
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        Err(reasons)
    }
}

/// A fund that failed screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedFund {
    /// The fund.
    pub fund: Fund,
    /// Failed rules.
    pub reasons: Vec<Rejection>,
}

/// Outcome of screening a fund list. Input order is preserved in both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenReport {
    /// Funds that met every rule.
    pub passed: Vec<Fund>,
    /// Funds that failed at least one rule.
    pub rejected: Vec<RejectedFund>,
}

impl ScreenReport {
    /// Number of funds screened.
    pub fn total(&self) -> usize {
        self.passed.len() + self.rejected.len()
    }

    /// Fraction of funds that passed, or zero for an empty report.
    pub fn pass_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.passed.len() as f64 / n as f64,
        }
    }
}

/// Screen `funds` against `criteria`.
pub fn screen(funds: impl IntoIterator<Item = Fund>, criteria: &ScreenCriteria) -> ScreenReport {
    let mut report = ScreenReport::default();

    for fund in funds {
        match screen_fund(&fund, criteria) {
            Ok(()) => report.passed.push(fund),
            Err(reasons) => {
                debug!(ticker = %fund.ticker, ?reasons, "fund rejected");
                report.rejected.push(RejectedFund { fund, reasons });
            }
        }
    }

    info!(
        total = report.total(),
        passed = report.passed.len(),
        min_aum = criteria.min_aum,
        min_track_record_years = criteria.min_track_record_years,
        as_of = %criteria.as_of,
        "screening complete"
    );
    report
}
