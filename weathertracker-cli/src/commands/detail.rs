//! Detail command - show one forecast day via the detail view-model.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use tokio::time::timeout;
use weathertracker_app::viewmodel::{DetailEvent, ForecastDetailViewModel};
use weathertracker_app::GetForecastDetailUseCase;
use weathertracker_core::StateContainer;

use crate::commands::build_context;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// How long to wait for the detail screen to settle.
const LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Arguments for detail command.
#[derive(Args)]
pub struct DetailArgs {
    /// Identity of the forecast day, e.g. "1699000000_0".
    pub id: String,
}

/// Runs the detail command.
pub async fn run(args: &DetailArgs, cli: &Cli) -> Result<()> {
    let ctx = build_context(cli)?;

    let view_model = ForecastDetailViewModel::new(GetForecastDetailUseCase::new(Arc::clone(
        &ctx.repository,
    )));
    let container = StateContainer::new(view_model);
    let mut states = container.subscribe();

    container.submit_event(DetailEvent::Init(args.id.clone()));

    let state = timeout(LOAD_TIMEOUT, async {
        loop {
            let state = states.borrow_and_update().clone();
            if !state.is_loading {
                break state;
            }
            if states.changed().await.is_err() {
                break states.borrow().clone();
            }
        }
    })
    .await
    .map_err(|_| anyhow::anyhow!("timed out loading forecast day {}", args.id))?;

    if state.show_error {
        bail!("{}", state.error_message);
    }

    match state.weather {
        Some(day) => match cli.format {
            OutputFormat::Text => print!("{}", TextFormatter::new().detail_card(&day)),
            OutputFormat::Json => println!("{}", JsonFormatter::new(cli.pretty).detail(&day)?),
        },
        None => bail!("no forecast day with id {}", args.id),
    }

    Ok(())
}
