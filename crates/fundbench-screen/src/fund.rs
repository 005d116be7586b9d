//! Fund and holding records, and their loaders.

use crate::error::{Result, ScreenError};
use chrono::NaiveDate;
use fundbench_registry::{ReturnPeriod, Ticker};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::Path};

/// Trailing returns in percent, one optional value per period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrailingReturns {
    values: [Option<f64>; 4],
}

impl TrailingReturns {
    /// No returns recorded.
    pub const fn new() -> Self {
        Self { values: [None; 4] }
    }

    /// Return for `period`, if recorded.
    pub const fn get(&self, period: ReturnPeriod) -> Option<f64> {
        self.values[period.index()]
    }

    /// Record the return for `period`.
    pub const fn set(&mut self, period: ReturnPeriod, value: Option<f64>) {
        self.values[period.index()] = value;
    }

    /// Builder-style [`set`](Self::set).
    pub const fn with(mut self, period: ReturnPeriod, value: f64) -> Self {
        self.set(period, Some(value));
        self
    }

    /// Recorded returns, shortest period first.
    pub fn iter(&self) -> impl Iterator<Item = (ReturnPeriod, f64)> + '_ {
        ReturnPeriod::all()
            .into_iter()
            .filter_map(|p| self.get(p).map(|v| (p, v)))
    }
}

/// A candidate fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Fund ticker.
    pub ticker: Ticker,

    /// Fund name.
    #[serde(default)]
    pub name: String,

    /// Category label (e.g. `Large Blend`).
    #[serde(default)]
    pub category: Option<String>,

    /// Assets under management in USD.
    #[serde(default)]
    pub aum: Option<f64>,

    /// Inception date.
    #[serde(default)]
    pub inception_date: Option<NaiveDate>,

    /// Expense ratio as a fraction (0.0003 = 3 bps).
    #[serde(default)]
    pub expense_ratio: Option<f64>,

    /// 1-year trailing return, percent.
    #[serde(default)]
    pub return_1y: Option<f64>,

    /// 3-year trailing return, percent.
    #[serde(default)]
    pub return_3y: Option<f64>,

    /// 5-year trailing return, percent.
    #[serde(default)]
    pub return_5y: Option<f64>,

    /// 10-year trailing return, percent.
    #[serde(default)]
    pub return_10y: Option<f64>,
}

impl Fund {
    /// Create a fund with only a ticker and a name.
    pub fn new(ticker: Ticker, name: impl Into<String>) -> Self {
        Self {
            ticker,
            name: name.into(),
            category: None,
            aum: None,
            inception_date: None,
            expense_ratio: None,
            return_1y: None,
            return_3y: None,
            return_5y: None,
            return_10y: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the AUM.
    pub const fn with_aum(mut self, aum: f64) -> Self {
        self.aum = Some(aum);
        self
    }

    /// Set the inception date.
    pub const fn with_inception(mut self, date: NaiveDate) -> Self {
        self.inception_date = Some(date);
        self
    }

    /// Set all trailing returns.
    pub const fn with_returns(mut self, returns: TrailingReturns) -> Self {
        self.return_1y = returns.get(ReturnPeriod::OneYear);
        self.return_3y = returns.get(ReturnPeriod::ThreeYear);
        self.return_5y = returns.get(ReturnPeriod::FiveYear);
        self.return_10y = returns.get(ReturnPeriod::TenYear);
        self
    }

    /// Trailing return for `period`.
    pub const fn trailing_return(&self, period: ReturnPeriod) -> Option<f64> {
        match period {
            ReturnPeriod::OneYear => self.return_1y,
            ReturnPeriod::ThreeYear => self.return_3y,
            ReturnPeriod::FiveYear => self.return_5y,
            ReturnPeriod::TenYear => self.return_10y,
        }
    }

    /// All trailing returns.
    pub fn returns(&self) -> TrailingReturns {
        let mut returns = TrailingReturns::new();
        for period in ReturnPeriod::all() {
            returns.set(period, self.trailing_return(period));
        }
        returns
    }

    /// Whole years between inception and `as_of`.
    ///
    /// `None` when the inception date is unknown or after `as_of`.
    pub fn track_record_years(&self, as_of: NaiveDate) -> Option<u32> {
        as_of.years_since(self.inception_date?)
    }
}

/// A portfolio position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Fund ticker.
    pub ticker: Ticker,

    /// Portfolio weight as a fraction of 1.
    pub weight: f64,
}

impl Holding {
    /// Create a holding.
    pub const fn new(ticker: Ticker, weight: f64) -> Self {
        Self { ticker, weight }
    }
}

/// Parse fund rows from CSV with a header line.
pub fn funds_from_csv<R: Read>(reader: R) -> Result<Vec<Fund>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let funds = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<Fund>, _>>()?;
    Ok(funds)
}

/// Parse a JSON array of funds.
pub fn funds_from_json<R: Read>(reader: R) -> Result<Vec<Fund>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse holding rows (`ticker,weight`) from CSV with a header line.
pub fn holdings_from_csv<R: Read>(reader: R) -> Result<Vec<Holding>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let holdings = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<Holding>, _>>()?;
    Ok(holdings)
}

/// Load funds from a `.csv` or `.json` file.
pub fn read_funds(path: &Path) -> Result<Vec<Fund>> {
    let file = File::open(path)?;
    match extension(path).as_deref() {
        Some("csv") => funds_from_csv(file),
        Some("json") => funds_from_json(file),
        _ => Err(ScreenError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Load holdings from a `.csv` or `.json` file.
pub fn read_holdings(path: &Path) -> Result<Vec<Holding>> {
    let file = File::open(path)?;
    match extension(path).as_deref() {
        Some("csv") => holdings_from_csv(file),
        Some("json") => Ok(serde_json::from_reader(file)?),
        _ => Err(ScreenError::UnsupportedFormat(path.display().to_string())),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_track_record_years() {
        let fund = Fund::new(Ticker::new("VTI").unwrap(), "Total Market")
            .with_inception(date(2020, 6, 15));

        assert_eq!(fund.track_record_years(date(2023, 6, 14)), Some(2));
        assert_eq!(fund.track_record_years(date(2023, 6, 15)), Some(3));
        assert_eq!(fund.track_record_years(date(2020, 6, 15)), Some(0));
        assert_eq!(fund.track_record_years(date(2019, 1, 1)), None);

        let undated = Fund::new(Ticker::new("NEW").unwrap(), "New Fund");
        assert_eq!(undated.track_record_years(date(2024, 1, 1)), None);
    }

    #[test]
    fn test_trailing_returns() {
        let returns = TrailingReturns::new()
            .with(ReturnPeriod::OneYear, 12.5)
            .with(ReturnPeriod::TenYear, 9.0);
        let fund = Fund::new(Ticker::new("ITOT").unwrap(), "").with_returns(returns);

        assert_eq!(fund.trailing_return(ReturnPeriod::OneYear), Some(12.5));
        assert_eq!(fund.trailing_return(ReturnPeriod::ThreeYear), None);
        assert_eq!(fund.returns(), returns);
        assert_eq!(returns.iter().count(), 2);
    }

    #[test]
    fn test_funds_from_csv() {
        let data = "\
ticker,name,category,aum,inception_date,expense_ratio,return_1y,return_3y,return_5y,return_10y
itot,iShares Core S&P Total U.S. Stock Market ETF,Large Blend,58000000000,2004-01-20,0.0003,26.5,9.2,14.8,12.1
NEWX,New Fund,,,,,,,,
";
        let funds = funds_from_csv(data.as_bytes()).unwrap();
        assert_eq!(funds.len(), 2);

        let itot = &funds[0];
        assert_eq!(itot.ticker.as_str(), "ITOT");
        assert_eq!(itot.category.as_deref(), Some("Large Blend"));
        assert_eq!(itot.aum, Some(58e9));
        assert_eq!(itot.inception_date, Some(date(2004, 1, 20)));
        assert_eq!(itot.trailing_return(ReturnPeriod::TenYear), Some(12.1));

        let new = &funds[1];
        assert_eq!(new.category, None);
        assert_eq!(new.aum, None);
        assert_eq!(new.inception_date, None);
    }

    #[test]
    fn test_funds_from_csv_bad_ticker() {
        let data = "ticker,name\n$$$,Broken\n";
        assert!(matches!(
            funds_from_csv(data.as_bytes()),
            Err(ScreenError::Csv(_))
        ));
    }

    #[test]
    fn test_funds_from_json() {
        let data = r#"[{"ticker": "AGG", "category": "Intermediate Core Bond", "aum": 1.2e11}]"#;
        let funds = funds_from_json(data.as_bytes()).unwrap();
        assert_eq!(funds[0].ticker.as_str(), "AGG");
        assert_eq!(funds[0].name, "");
        assert_eq!(funds[0].return_1y, None);
    }

    #[test]
    fn test_holdings_from_csv() {
        let data = "ticker,weight\nVTI,0.6\nBND,0.4\n";
        let holdings = holdings_from_csv(data.as_bytes()).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[1].ticker.as_str(), "BND");
        assert_eq!(holdings[1].weight, 0.4);
    }

    #[test]
    fn test_read_funds_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let csv = dir.path().join("funds.CSV");
        let rows = "ticker,name,return_5y\nIEFA,EAFE,5.2\n";
        std::fs::write(&csv, rows).unwrap();
        let funds = read_funds(&csv).unwrap();
        assert_eq!(funds[0].trailing_return(ReturnPeriod::FiveYear), Some(5.2));

        let json = dir.path().join("funds.json");
        let rows = r#"[{"ticker": "IEMG", "return_1y": 7.0}]"#;
        std::fs::write(&json, rows).unwrap();
        let funds = read_funds(&json).unwrap();
        assert_eq!(funds[0].returns().get(ReturnPeriod::OneYear), Some(7.0));
    }

    #[test]
    fn test_read_funds_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        assert!(matches!(
            read_funds(file.path()),
            Err(ScreenError::UnsupportedFormat(_))
        ));
    }
}
