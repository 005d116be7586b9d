//! Trailing-return lookback periods.

use crate::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Trailing-return window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReturnPeriod {
    /// One year
    #[serde(rename = "1Y")]
    OneYear,

    /// Three years
    #[serde(rename = "3Y")]
    ThreeYear,

    /// Five years
    #[serde(rename = "5Y")]
    FiveYear,

    /// Ten years
    #[serde(rename = "10Y")]
    TenYear,
}

impl ReturnPeriod {
    /// Returns all periods, shortest first.
    pub const fn all() -> [Self; 4] {
        [
            Self::OneYear,
            Self::ThreeYear,
            Self::FiveYear,
            Self::TenYear,
        ]
    }

    /// Catalog label (`1Y`, `3Y`, `5Y`, `10Y`).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneYear => "1Y",
            Self::ThreeYear => "3Y",
            Self::FiveYear => "5Y",
            Self::TenYear => "10Y",
        }
    }

    /// Position in [`ReturnPeriod::all`].
    pub const fn index(&self) -> usize {
        match self {
            Self::OneYear => 0,
            Self::ThreeYear => 1,
            Self::FiveYear => 2,
            Self::TenYear => 3,
        }
    }

    /// Window length in years.
    pub const fn years(&self) -> u32 {
        match self {
            Self::OneYear => 1,
            Self::ThreeYear => 3,
            Self::FiveYear => 5,
            Self::TenYear => 10,
        }
    }
}

impl fmt::Display for ReturnPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ReturnPeriod {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::all()
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RegistryError::UnknownReturnPeriod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1Y", ReturnPeriod::OneYear, 1)]
    #[case("3y", ReturnPeriod::ThreeYear, 3)]
    #[case(" 5Y", ReturnPeriod::FiveYear, 5)]
    #[case("10Y", ReturnPeriod::TenYear, 10)]
    fn test_parse(#[case] label: &str, #[case] expected: ReturnPeriod, #[case] years: u32) {
        let period: ReturnPeriod = label.parse().unwrap();
        assert_eq!(period, expected);
        assert_eq!(period.years(), years);
    }

    #[test]
    fn test_unknown_label() {
        assert!(matches!(
            "2Y".parse::<ReturnPeriod>(),
            Err(RegistryError::UnknownReturnPeriod(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let all = ReturnPeriod::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].years() < pair[1].years());
        }
        assert_eq!(ReturnPeriod::TenYear.to_string(), "10Y");
    }
}
