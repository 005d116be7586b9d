//! End-to-end screening and benchmarking of a small fund list.

use chrono::NaiveDate;
use fundbench::screen::{
    benchmark_weights, blended_returns, excess_returns, fund, portfolio_returns, screen,
};
use fundbench::{BenchmarkKey, Classifier, Registry, ReturnPeriod, ScreenCriteria, UnmappedPolicy};

const FUNDS: &str = "\
ticker,name,category,aum,inception_date,expense_ratio,return_1y,return_3y,return_5y,return_10y
VTI,Vanguard Total Stock Market ETF,Large Blend,420000000000,2001-05-24,0.0003,26.8,9.8,14.9,12.3
VXUS,Vanguard Total International Stock ETF,Foreign Large Blend,80000000000,2011-01-26,0.0008,5.1,1.2,5.0,4.9
VWO,Vanguard FTSE Emerging Markets ETF,Diversified Emerging Mkts,110000000000,2005-03-04,0.0008,7.5,-1.0,3.2,3.5
BND,Vanguard Total Bond Market ETF,Intermediate Core Bond,120000000000,2007-04-03,0.0003,1.3,-2.4,-0.3,1.4
GLD,SPDR Gold Shares,Commodities Focused,70000000000,2004-11-18,0.004,27.0,12.0,11.5,7.9
TINY,Tiny Start-up Fund,Large Growth,5000000,2023-09-01,0.009,40.0,,,
";

const BENCHMARKS: &str = "\
ticker,name,category,aum,inception_date,expense_ratio,return_1y,return_3y,return_5y,return_10y
ITOT,iShares Core S&P Total U.S. Stock Market ETF,Large Blend,58000000000,2004-01-20,0.0003,26.5,9.2,14.8,12.1
IEFA,iShares Core MSCI EAFE ETF,Foreign Large Blend,120000000000,2012-10-18,0.0007,4.5,1.8,5.2,5.4
IEMG,iShares Core MSCI Emerging Markets ETF,Diversified Emerging Mkts,80000000000,2012-10-18,0.0009,7.0,-1.5,3.0,3.4
AGG,iShares Core U.S. Aggregate Bond ETF,Intermediate Core Bond,110000000000,2003-09-22,0.0003,1.2,-2.5,-0.4,1.3
";

#[test]
fn test_screen_then_benchmark() {
    let registry = Registry::global();
    let funds = fund::funds_from_csv(FUNDS.as_bytes()).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

    let report = screen(
        funds.clone(),
        &ScreenCriteria::from_registry(registry, as_of),
    );
    assert_eq!(report.passed.len(), 5);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].fund.ticker.as_str(), "TINY");
    assert_eq!(report.rejected[0].reasons.len(), 2);

    let classifier = Classifier::new(registry, UnmappedPolicy::Flag);
    let classes = classifier.classify_all(&report.passed);
    let flagged: Vec<_> = classes.flagged().iter().map(|t| t.as_str()).collect();
    assert_eq!(flagged, ["GLD"]);

    let holdings = fund::holdings_from_csv(
        "ticker,weight\nVTI,0.45\nVXUS,0.15\nVWO,0.05\nBND,0.25\nGLD,0.10\n".as_bytes(),
    )
    .unwrap();
    let weights = benchmark_weights(&holdings, &report.passed, &classifier).unwrap();
    assert!((weights.unmapped() - 0.10).abs() < 1e-12);
    assert!((weights.total() - 1.0).abs() < 1e-12);
    assert!((weights.get(BenchmarkKey::UsEquity).unwrap() - 0.5).abs() < 1e-12);

    let benchmarks = fund::funds_from_csv(BENCHMARKS.as_bytes()).unwrap();
    let blended = blended_returns(&weights, registry, &benchmarks);
    let expected_1y = 0.5 * 26.5 + (0.15 / 0.9) * 4.5 + (0.05 / 0.9) * 7.0 + (0.25 / 0.9) * 1.2;
    assert!((blended.get(ReturnPeriod::OneYear).unwrap() - expected_1y).abs() < 1e-9);

    let portfolio = portfolio_returns(&holdings, &report.passed, registry.return_periods());
    let excess = excess_returns(&portfolio, &blended);
    assert_eq!(excess.len(), 4);
    assert!(excess.iter().all(|(_, e)| e.is_some()));
}
