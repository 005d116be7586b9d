//! Text and JSON rendering for CLI commands.

use clap::ValueEnum;
use fundbench::{BenchmarkKey, Registry, ReturnPeriod, ScreenCriteria, ScreenReport};
use fundbench_registry::normalize_category;
use fundbench_screen::{
    BenchmarkRow, BenchmarkWeights, BlendedReturns, CategoryRow, ClassificationReport, ScreenRow,
    TrailingReturns,
};
use serde::Serialize;
use serde_json::json;

type CliResult = Result<(), Box<dyn std::error::Error>>;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputMode {
    /// Aligned tables
    Text,
    /// Pretty-printed JSON
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn heading(title: &str) {
    println!("{}", RULE);
    println!("{}", title);
    println!("{}\n", RULE);
}

pub(crate) fn period_labels(periods: &[ReturnPeriod]) -> String {
    periods
        .iter()
        .map(ReturnPeriod::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn pct(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:+.2}%", v))
}

pub(crate) fn benchmarks(registry: &Registry, mode: OutputMode) -> CliResult {
    let rows = BenchmarkRow::from_registry(registry);
    if mode == OutputMode::Json {
        return print_json(&rows);
    }

    heading("BENCHMARKS");
    println!("  {:16} {:18} {}", "Key", "Segment", "Ticker");
    for row in &rows {
        println!("  {:16} {:18} {}", row.key.as_str(), row.name, row.ticker);
    }
    println!();
    println!("  Min AUM:          ${}", registry.min_aum());
    println!(
        "  Min track record: {} years",
        registry.min_track_record_years()
    );
    println!(
        "  Return periods:   {}",
        period_labels(registry.return_periods())
    );
    Ok(())
}

pub(crate) fn categories(
    registry: &Registry,
    only: Option<BenchmarkKey>,
    mode: OutputMode,
) -> CliResult {
    let rows = CategoryRow::from_registry(registry, only);
    if mode == OutputMode::Json {
        return print_json(&rows);
    }

    heading("FUND CATEGORIES");
    for key in BenchmarkKey::all() {
        let labels: Vec<_> = rows
            .iter()
            .filter(|r| r.benchmark_key == key)
            .map(|r| r.category.as_str())
            .collect();
        if labels.is_empty() {
            continue;
        }
        println!(
            "{} → {} ({} categories)",
            key.name(),
            registry.ticker(key),
            labels.len()
        );
        for label in labels {
            println!("  {}", label);
        }
        println!();
    }
    Ok(())
}

pub(crate) fn lookup(registry: &Registry, labels: &[String], mode: OutputMode) -> CliResult {
    let results: Vec<_> = labels
        .iter()
        .map(|label| (label.as_str(), registry.benchmark_for_category(label)))
        .collect();

    if mode == OutputMode::Json {
        let rows: Vec<_> = results
            .iter()
            .map(|(label, key)| {
                json!({
                    "category": label,
                    "benchmark_key": key,
                    "ticker": key.map(|k| registry.ticker(k).to_string()),
                })
            })
            .collect();
        return print_json(&rows);
    }

    for (label, key) in results {
        match key {
            Some(key) => println!("{:30} → {} ({})", label, key, registry.ticker(key)),
            None => println!(
                "{:30} → no benchmark (unmapped: {:?})",
                label,
                normalize_category(label)
            ),
        }
    }
    Ok(())
}

pub(crate) fn screen(
    report: &ScreenReport,
    criteria: &ScreenCriteria,
    mode: OutputMode,
) -> CliResult {
    if mode == OutputMode::Json {
        return print_json(&json!({
            "criteria": criteria,
            "total": report.total(),
            "passed": report.passed.len(),
            "results": ScreenRow::from_report(report),
        }));
    }

    heading("FUND SCREEN");
    println!(
        "  Min AUM ${}, min track record {} years, as of {}\n",
        criteria.min_aum, criteria.min_track_record_years, criteria.as_of
    );

    println!("Passed ({}):", report.passed.len());
    for fund in &report.passed {
        println!("  ✓ {:10} {}", fund.ticker, fund.name);
    }
    println!("\nRejected ({}):", report.rejected.len());
    for rejected in &report.rejected {
        let reasons: Vec<_> = rejected.reasons.iter().map(ToString::to_string).collect();
        println!("  ✗ {:10} {}", rejected.fund.ticker, reasons.join("; "));
    }
    println!("\nPass rate: {:.1}%", report.pass_rate() * 100.0);
    Ok(())
}

pub(crate) fn classification(
    registry: &Registry,
    report: &ClassificationReport,
    mode: OutputMode,
) -> CliResult {
    if mode == OutputMode::Json {
        return print_json(&json!({
            "results": report.results,
            "flagged": report.flagged(),
            "counts": report.counts(),
        }));
    }

    heading("CLASSIFICATION");
    for (ticker, class) in &report.results {
        match class.benchmark() {
            Some(key) if class.is_mapped() => {
                println!("  {:10} {} ({})", ticker, key, registry.ticker(key))
            }
            Some(key) => println!(
                "  {:10} {} ({}) [fallback]",
                ticker,
                key,
                registry.ticker(key)
            ),
            None => println!("  {:10} unclassified", ticker),
        }
    }

    println!();
    for (key, count) in report.counts() {
        println!("  {:16} {:4} funds", key.as_str(), count);
    }
    let flagged = report.flagged();
    if !flagged.is_empty() {
        let tickers: Vec<_> = flagged.iter().map(|t| t.as_str()).collect();
        println!("\nNeeds manual classification: {}", tickers.join(", "));
    }
    Ok(())
}

pub(crate) fn blend(
    registry: &Registry,
    weights: &BenchmarkWeights,
    blended: &BlendedReturns,
    portfolio: &TrailingReturns,
    excess: &[(ReturnPeriod, Option<f64>)],
    mode: OutputMode,
) -> CliResult {
    if mode == OutputMode::Json {
        let weights: Vec<_> = weights
            .iter()
            .map(|(key, w)| {
                json!({
                    "benchmark_key": key,
                    "ticker": registry.ticker(key),
                    "weight": w,
                })
            })
            .collect();
        let periods: Vec<_> = excess
            .iter()
            .map(|(period, e)| {
                json!({
                    "period": period,
                    "portfolio": portfolio.get(*period),
                    "benchmark": blended.get(*period),
                    "excess": e,
                })
            })
            .collect();
        return print_json(&json!({ "weights": weights, "returns": periods }));
    }

    heading("BLENDED BENCHMARK");
    if weights.is_empty() {
        println!("  No holdings map to a benchmark.");
    }
    for (key, weight) in weights.iter() {
        println!(
            "  {:8} {:18} {:6.2}%",
            registry.ticker(key),
            key.name(),
            weight * 100.0
        );
    }
    if weights.unmapped() > 0.0 {
        println!(
            "  Unmapped weight excluded: {:.2}%",
            weights.unmapped() * 100.0
        );
    }

    println!(
        "\n  {:6} {:>10} {:>10} {:>10}",
        "Period", "Portfolio", "Benchmark", "Excess"
    );
    for (period, e) in excess {
        println!(
            "  {:6} {:>10} {:>10} {:>10}",
            period.label(),
            pct(portfolio.get(*period)),
            pct(blended.get(*period)),
            pct(*e)
        );
    }
    Ok(())
}
