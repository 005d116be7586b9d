//! Benchmark keys and ticker symbols.

use crate::error::{RegistryError, Result};
use derive_more::{AsRef, Display, Into};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Broad asset-class segments, each tracked by one benchmark fund.
///
/// The set is closed: every category mapping resolves to one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkKey {
    /// US total stock market
    UsEquity,

    /// International developed markets
    IntlDeveloped,

    /// Emerging markets
    Emerging,

    /// US investment-grade aggregate bonds
    UsBonds,
}

impl BenchmarkKey {
    /// Number of benchmark keys.
    pub const COUNT: usize = 4;

    /// Returns all keys in registry order.
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::UsEquity,
            Self::IntlDeveloped,
            Self::Emerging,
            Self::UsBonds,
        ]
    }

    /// Returns the snake-case registry key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UsEquity => "us_equity",
            Self::IntlDeveloped => "intl_developed",
            Self::Emerging => "emerging",
            Self::UsBonds => "us_bonds",
        }
    }

    /// Returns the human-readable segment name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UsEquity => "US Equity",
            Self::IntlDeveloped => "Intl Developed",
            Self::Emerging => "Emerging Markets",
            Self::UsBonds => "US Bonds",
        }
    }

    /// Position of the key in registry order.
    pub const fn index(&self) -> usize {
        match self {
            Self::UsEquity => 0,
            Self::IntlDeveloped => 1,
            Self::Emerging => 2,
            Self::UsBonds => 3,
        }
    }
}

impl fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BenchmarkKey {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::all()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RegistryError::UnknownBenchmark(s.to_string()))
    }
}

/// Longest ticker accepted.
pub const MAX_TICKER_LEN: usize = 10;

/// Exchange ticker symbol, stored upper-case.
///
/// Accepts 1 to [`MAX_TICKER_LEN`] characters drawn from `A-Z`, `0-9`, `.`
/// and `-`, starting with a letter (`ITOT`, `BRK.B`, `BF-B`).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, AsRef, Display, Into, Serialize,
    Deserialize,
)]
#[as_ref(forward)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse and validate a ticker. Input is trimmed and upper-cased.
    pub fn new(symbol: impl AsRef<str>) -> Result<Self> {
        let raw = symbol.as_ref();
        let symbol = raw.trim().to_ascii_uppercase();
        let invalid = |reason| RegistryError::InvalidTicker {
            ticker: raw.to_string(),
            reason,
        };

        if symbol.is_empty() {
            return Err(invalid("empty"));
        }
        if symbol.len() > MAX_TICKER_LEN {
            return Err(invalid("too long"));
        }
        if !symbol.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(invalid("must start with a letter"));
        }
        if !symbol
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.' || c == '-')
        {
            return Err(invalid("only A-Z, 0-9, '.' and '-' allowed"));
        }

        Ok(Self(symbol))
    }

    /// Wrap a builtin symbol that is covered by the table tests.
    pub(crate) fn builtin(symbol: &'static str) -> Self {
        Self(symbol.to_string())
    }

    /// The symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl PartialEq<str> for Ticker {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Ticker {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_keys() {
        let keys = BenchmarkKey::all();
        assert_eq!(keys.len(), BenchmarkKey::COUNT);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[rstest]
    #[case("us_equity", BenchmarkKey::UsEquity)]
    #[case("intl_developed", BenchmarkKey::IntlDeveloped)]
    #[case(" Emerging ", BenchmarkKey::Emerging)]
    #[case("US_BONDS", BenchmarkKey::UsBonds)]
    fn test_parse_key(#[case] input: &str, #[case] expected: BenchmarkKey) {
        assert_eq!(input.parse::<BenchmarkKey>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "commodities".parse::<BenchmarkKey>().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownBenchmark(ref k) if k == "commodities"));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(BenchmarkKey::UsEquity.to_string(), "us_equity");
        assert_eq!(BenchmarkKey::Emerging.name(), "Emerging Markets");
    }

    #[rstest]
    #[case("itot", "ITOT")]
    #[case(" AGG ", "AGG")]
    #[case("brk.b", "BRK.B")]
    #[case("BF-B", "BF-B")]
    fn test_ticker_valid(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Ticker::new(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("1ABC")]
    #[case("AB CD")]
    #[case("ABCDEFGHIJK")]
    #[case("IT$T")]
    fn test_ticker_invalid(#[case] input: &str) {
        assert!(matches!(
            Ticker::new(input),
            Err(RegistryError::InvalidTicker { .. })
        ));
    }

    #[test]
    fn test_ticker_as_ref() {
        let ticker = Ticker::new("itot").unwrap();
        let symbol: &str = ticker.as_ref();
        assert_eq!(symbol, "ITOT");
        assert_eq!(Ticker::new(&ticker).unwrap(), ticker);
    }

    #[test]
    fn test_ticker_comparisons() {
        let ticker = Ticker::new("IEMG").unwrap();
        assert_eq!(ticker, "IEMG");
        assert_eq!(format!("{ticker}"), "IEMG");
        let s: String = ticker.into();
        assert_eq!(s, "IEMG");
    }
}
