// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! WeatherTracker CLI - a cached multi-day forecast from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Refresh and show the forecast for the configured location
//! weathertracker
//!
//! # Show the cached forecast without refreshing
//! weathertracker forecast --no-refresh
//!
//! # Show one forecast day
//! weathertracker detail 1699000000_0
//!
//! # Live mode with periodic refresh
//! weathertracker watch --interval 30
//!
//! # JSON output
//! weathertracker --format json --pretty
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{detail, forecast, watch};

// ============================================================================
// CLI Definition
// ============================================================================

/// WeatherTracker CLI - cached multi-day weather forecast.
#[derive(Parser)]
#[command(name = "weathertracker")]
#[command(about = "Cached multi-day weather forecast CLI")]
#[command(long_about = r"
WeatherTracker fetches a multi-day forecast for a fixed location, caches it
in a local SQLite database, and renders from the cache. A failed refresh
keeps the previous snapshot on screen.

Examples:
  weathertracker                     # Refresh, then show the forecast
  weathertracker forecast --no-refresh
  weathertracker detail <id>         # One forecast day
  weathertracker watch --interval 30 # Live mode with periodic refresh
  weathertracker --format json       # JSON output
")]
#[command(version)]
#[command(author = "WeatherTracker Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'forecast' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Database path (defaults to the per-user data directory).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Latitude override.
    #[arg(long, global = true)]
    pub lat: Option<f64>,

    /// Longitude override.
    #[arg(long, global = true)]
    pub lon: Option<f64>,

    /// API key override (otherwise config file or OPENWEATHER_API_KEY).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Refresh and show the forecast (default if no command specified).
    #[command(visible_alias = "f")]
    Forecast(forecast::ForecastArgs),

    /// Show one forecast day.
    #[command(visible_alias = "d")]
    Detail(detail::DetailArgs),

    /// Watch the forecast with periodic refresh.
    #[command(visible_alias = "w")]
    Watch(watch::WatchArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("weathertracker=debug,info")
    } else {
        EnvFilter::new("weathertracker=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Some(Commands::Forecast(args)) => forecast::run(args, &cli).await,
        Some(Commands::Detail(args)) => detail::run(args, &cli).await,
        Some(Commands::Watch(args)) => watch::run(args, &cli).await,
        None => forecast::run(&forecast::ForecastArgs::default(), &cli).await,
    }
}
