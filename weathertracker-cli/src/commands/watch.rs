//! Watch command - live forecast with periodic refresh.

use std::io::{stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use futures::StreamExt;
use tracing::info;
use weathertracker_app::viewmodel::{ForecastListViewModel, ListEvent};
use weathertracker_app::{GetForecastUseCase, RefreshForecastUseCase};
use weathertracker_core::StateContainer;

use crate::commands::build_context;
use crate::output::TextFormatter;
use crate::Cli;

/// Arguments for watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds.
    #[arg(long, short, default_value = "30")]
    pub interval: u64,

    /// Minimum interval to use.
    #[arg(long, default_value = "10")]
    pub min_interval: u64,
}

/// Runs the watch command.
pub async fn run(args: &WatchArgs, cli: &Cli) -> Result<()> {
    let refresh_interval = args.interval.max(args.min_interval);

    info!(interval = refresh_interval, "Starting watch mode");

    let ctx = build_context(cli)?;
    let view_model = ForecastListViewModel::new(
        GetForecastUseCase::new(Arc::clone(&ctx.repository)),
        RefreshForecastUseCase::new(Arc::clone(&ctx.repository)),
        ctx.params(),
        Some(Duration::from_secs(refresh_interval)),
    );
    let container = StateContainer::new(view_model);
    let formatter = TextFormatter::new();

    container.submit_event(ListEvent::Init);

    let mut states = Box::pin(container.state_stream());
    while let Some(state) = states.next().await {
        // Clear screen
        print!("\x1b[2J\x1b[H");

        let now = chrono::Local::now();
        println!(
            "WeatherTracker Watch Mode - {} (refresh: {}s)",
            now.format("%H:%M:%S"),
            refresh_interval
        );
        println!("{}", "─".repeat(50));
        println!();

        if state.is_loading {
            println!("Loading...");
        } else {
            print!("{}", formatter.forecast_table(&state.days));
        }
        if state.is_refreshing {
            println!();
            println!("Refreshing...");
        }
        if state.show_error {
            println!();
            print!("{}", formatter.error_banner(&state.error_message));
        }

        stdout().flush()?;
    }

    Ok(())
}
