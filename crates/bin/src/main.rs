//! fundbench CLI binary.
//!
//! Provides command-line access to the benchmark registry and fund screening.

mod output;

use chrono::{NaiveDate, Utc};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fundbench::{BenchmarkKey, Classifier, ScreenCriteria, Settings, UnmappedPolicy};
use fundbench_screen::{
    BenchmarkRow, CategoryRow, ExportFormat, Exporter, benchmark_weights, blended_returns,
    excess_returns,
    fund::{read_funds, read_holdings},
    portfolio_returns, screen,
};
use output::OutputMode;
use serde_json::json;
use std::{io, path::PathBuf, process};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundbench")]
#[command(about = "fundbench: benchmark registry and fund screening", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (default: <config dir>/fundbench/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output mode
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
    Benchmarks,
    Categories,
}

#[derive(Subcommand)]
enum Commands {
    /// List the benchmark funds
    Benchmarks,

    /// List the category to benchmark map
    Categories {
        /// Only categories for this benchmark key (e.g. us_equity)
        #[arg(long)]
        benchmark: Option<String>,
    },

    /// Resolve category labels to benchmarks
    Lookup {
        /// Category labels
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Screen funds by AUM and track record
    Screen {
        /// Fund file (.csv or .json)
        funds: PathBuf,

        /// Date track records are measured to (default: today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Override the minimum AUM (USD)
        #[arg(long)]
        min_aum: Option<u64>,

        /// Override the minimum track record (years)
        #[arg(long)]
        min_years: Option<u32>,
    },

    /// Assign funds to benchmarks by category
    Classify {
        /// Fund file (.csv or .json)
        funds: PathBuf,

        /// Benchmark key for unmapped categories (default: flag them)
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Compare a portfolio with its blended benchmark
    Blend {
        /// Holdings file with ticker and weight columns
        holdings: PathBuf,

        /// Fund file (.csv or .json)
        funds: PathBuf,

        /// File with benchmark fund returns (default: the fund file)
        #[arg(long)]
        benchmarks: Option<PathBuf>,

        /// Benchmark key for unmapped categories (default: leave unmapped)
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Load and validate the configuration
    Validate,

    /// Export a registry table
    Export {
        /// Table to export
        #[arg(value_enum)]
        table: Table,

        /// csv, json or pretty-json
        #[arg(long = "to", default_value = "csv")]
        to: String,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Settings::load(cli.config.as_deref())?.into_registry()?;
    debug!(categories = registry.category_count(), "registry loaded");
    let mode = cli.format;

    match cli.command {
        Commands::Benchmarks => output::benchmarks(&registry, mode)?,
        Commands::Categories { benchmark } => {
            let only = benchmark
                .as_deref()
                .map(str::parse::<BenchmarkKey>)
                .transpose()?;
            output::categories(&registry, only, mode)?;
        }
        Commands::Lookup { labels } => output::lookup(&registry, &labels, mode)?,
        Commands::Screen {
            funds,
            as_of,
            min_aum,
            min_years,
        } => {
            let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());
            let mut criteria = ScreenCriteria::from_registry(&registry, as_of);
            if let Some(min_aum) = min_aum {
                criteria.min_aum = min_aum;
            }
            if let Some(years) = min_years {
                criteria.min_track_record_years = years;
            }

            let funds = read_funds(&funds)?;
            info!(count = funds.len(), "funds loaded");
            let report = screen(funds, &criteria);
            output::screen(&report, &criteria, mode)?;
        }
        Commands::Classify { funds, fallback } => {
            let classifier = Classifier::new(&registry, policy(fallback.as_deref())?);
            let funds = read_funds(&funds)?;
            let report = classifier.classify_all(&funds);
            output::classification(&registry, &report, mode)?;
        }
        Commands::Blend {
            holdings,
            funds,
            benchmarks,
            fallback,
        } => {
            let classifier = Classifier::new(&registry, policy(fallback.as_deref())?);
            let holdings = read_holdings(&holdings)?;
            let funds = read_funds(&funds)?;
            let benchmark_funds = match benchmarks {
                Some(path) => read_funds(&path)?,
                None => funds.clone(),
            };

            let weights = benchmark_weights(&holdings, &funds, &classifier)?;
            let blended = blended_returns(&weights, &registry, &benchmark_funds);
            let portfolio = portfolio_returns(&holdings, &funds, registry.return_periods());
            let excess = excess_returns(&portfolio, &blended);
            output::blend(&registry, &weights, &blended, &portfolio, &excess, mode)?;
        }
        Commands::Validate => {
            registry.validate()?;
            match mode {
                OutputMode::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "valid": true,
                        "benchmarks": BenchmarkRow::from_registry(&registry),
                        "categories": registry.category_count(),
                        "min_aum": registry.min_aum(),
                        "min_track_record_years": registry.min_track_record_years(),
                        "return_periods": registry.return_periods(),
                    }))?
                ),
                OutputMode::Text => {
                    println!("Configuration OK");
                    println!("  Benchmarks:    {}", BenchmarkKey::COUNT);
                    println!("  Categories:    {}", registry.category_count());
                    println!("  Min AUM:       ${}", registry.min_aum());
                    println!(
                        "  Min track:     {} years",
                        registry.min_track_record_years()
                    );
                    println!(
                        "  Periods:       {}",
                        output::period_labels(registry.return_periods())
                    );
                }
            }
        }
        Commands::Export { table, to, output } => {
            let format: ExportFormat = to.parse()?;
            let exporter: Box<dyn Exporter> = match table {
                Table::Benchmarks => Box::new(BenchmarkRow::from_registry(&registry)),
                Table::Categories => Box::new(CategoryRow::from_registry(&registry, None)),
            };
            match output {
                Some(path) => {
                    exporter.export_to_file(&path, format)?;
                    info!(path = %path.display(), "exported");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    exporter.export_to_writer(&mut stdout, format)?;
                }
            }
        }
    }

    Ok(())
}

fn policy(fallback: Option<&str>) -> Result<UnmappedPolicy, Box<dyn std::error::Error>> {
    Ok(match fallback {
        Some(key) => UnmappedPolicy::Fallback(key.parse()?),
        None => UnmappedPolicy::Flag,
    })
}
