//! MonthLab TUI — interactive monthly performance of one stock.
//!
//! Views:
//! 1. Heatmap — Year × Month returns, colored by class
//! 2. By Month — positive / non-positive counts per calendar month
//! 3. By Year — positive / non-positive counts per year
//! 4. Help — keyboard shortcuts and color legend
//!
//! Prices are fetched and analyzed before the terminal switches to the
//! alternate screen, so fetch errors print normally.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use monthlab_core::data::ProviderChoice;
use monthlab_core::{analyze, AnalysisConfig};
use monthlab_tui::{handle_key, ui, AppState};

#[derive(Parser)]
#[command(
    name = "monthlab-tui",
    about = "MonthLab TUI — monthly performance heatmap and histograms for one stock"
)]
struct Cli {
    /// Symbol to analyze. Defaults to the config file or TUPRS.IS.
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
    let analysis = analyze(provider.as_ref(), &config, today)
        .with_context(|| format!("analyzing {}", config.symbol))?;
    tracing::info!(
        symbol = %config.symbol,
        years = analysis.report.years.len(),
        "report ready, entering terminal"
    );
    let mut app = AppState::new(analysis);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }
    }
    Ok(())
}

/// Logs go to stderr at `warn` by default so they do not fight the alternate screen.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
