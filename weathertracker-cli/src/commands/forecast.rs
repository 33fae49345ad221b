//! Forecast command - refresh and print the cached forecast.

use anyhow::Result;
use clap::Args;
use futures::StreamExt;
use std::sync::Arc;
use tracing::warn;
use weathertracker_app::{ForecastDayUi, GetForecastUseCase, RefreshForecastUseCase};

use crate::commands::build_context;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for forecast command.
#[derive(Args, Default)]
pub struct ForecastArgs {
    /// Show the cached forecast without refreshing.
    #[arg(long)]
    pub no_refresh: bool,
}

/// Runs the forecast command.
pub async fn run(args: &ForecastArgs, cli: &Cli) -> Result<()> {
    let ctx = build_context(cli)?;

    if !args.no_refresh {
        let refresh = RefreshForecastUseCase::new(Arc::clone(&ctx.repository));
        // A failed refresh keeps the cached snapshot; surface the failure
        // and render what we have.
        if let Err(error) = refresh.invoke(ctx.params()).await {
            warn!(error = %error, "Refresh failed, showing cached data");
            eprintln!("warning: {error}");
        }
    }

    let get_forecast = GetForecastUseCase::new(Arc::clone(&ctx.repository));
    let mut updates = get_forecast.invoke();
    let days = match updates.next().await {
        Some(Ok(days)) => days,
        Some(Err(error)) => return Err(error.into()),
        None => Vec::new(),
    };

    let rows = ForecastDayUi::from_days(&days);
    match cli.format {
        OutputFormat::Text => print!("{}", TextFormatter::new().forecast_table(&rows)),
        OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).forecast(&rows)?),
    }

    Ok(())
}
