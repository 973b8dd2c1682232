//! MonthLab CLI — fetch one symbol's prices and print its monthly performance.
//!
//! Output:
//! - heatmap of monthly returns (Year × Month) with class markers
//! - counts of positive / non-positive months per calendar month
//! - counts of positive / non-positive months per year
//!
//! `--json` prints the whole report as JSON instead.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use monthlab_core::data::ProviderChoice;
use monthlab_core::{analyze, AnalysisConfig, Axis};

#[derive(Parser)]
#[command(
    name = "monthlab",
    about = "MonthLab CLI — monthly performance heatmap and histograms for one stock"
)]
struct Cli {
    /// Symbol to analyze (e.g., TUPRS.IS, SPY). Defaults to the config file or TUPRS.IS.
    symbol: Option<String>,

    /// Start date (YYYY-MM-DD). Defaults to the config file or 2010-01-01.
    #[arg(long)]
    start: Option<String>,

    /// TOML config file with `symbol` and `start_date`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read prices from a CSV export instead of Yahoo Finance.
    #[arg(long, conflicts_with = "synthetic")]
    csv: Option<PathBuf>,

    /// Use a deterministic synthetic random walk (offline demo).
    #[arg(long, default_value_t = false)]
    synthetic: bool,

    /// Print the report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Which part of the report to print.
    #[arg(long, value_enum, default_value_t = View::All)]
    view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Heatmap,
    Months,
    Years,
    All,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    let config = base.with_overrides(cli.symbol.as_deref(), cli.start.as_deref())?;
    let today = chrono::Local::now().date_naive();

    let provider = ProviderChoice::from_flags(cli.csv.clone(), cli.synthetic).build()?;
    tracing::info!(
        symbol = %config.symbol,
        start = %config.start_date,
        provider = provider.name(),
        "starting analysis"
    );

    let analysis = analyze(provider.as_ref(), &config, today)
        .with_context(|| format!("analyzing {}", config.symbol))?;
    let report = &analysis.report;

    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("{}", report.title());
    println!(
        "Source: {} ({} observations)",
        analysis.source.label(),
        analysis.observation_count
    );
    println!();

    if matches!(cli.view, View::Heatmap | View::All) {
        print!("{}", render::heatmap(report));
        println!();
    }
    if matches!(cli.view, View::Months | View::All) {
        print!("{}", render::counts(report.counts(Axis::ByMonth)));
        println!();
    }
    if matches!(cli.view, View::Years | View::All) {
        print!("{}", render::counts(report.counts(Axis::ByYear)));
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("monthlab_core=info,monthlab=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
