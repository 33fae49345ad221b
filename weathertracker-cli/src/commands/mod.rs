//! CLI commands.

pub mod detail;
pub mod forecast;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};
use weathertracker_app::{ForecastRepository, WeatherDataRepository};
use weathertracker_core::RefreshParams;
use weathertracker_fetch::OpenWeatherClient;
use weathertracker_store::{default_db_path, ForecastStore, WeatherConfig};

use crate::Cli;

/// Everything a command needs: resolved config and the wired repository.
pub struct AppContext {
    /// Resolved configuration (file + env + CLI overrides).
    pub config: WeatherConfig,
    /// The repository over the remote fetcher and the local store.
    pub repository: Arc<dyn ForecastRepository>,
}

impl AppContext {
    /// The refresh parameters for the configured location.
    pub fn params(&self) -> RefreshParams {
        RefreshParams::new(
            self.config.latitude,
            self.config.longitude,
            self.config.api_key.clone(),
        )
    }
}

/// Loads configuration, opens the store, and wires the repository.
pub fn build_context(cli: &Cli) -> Result<AppContext> {
    let mut config = WeatherConfig::load().context("failed to load configuration")?;
    if let Some(lat) = cli.lat {
        config.latitude = lat;
    }
    if let Some(lon) = cli.lon {
        config.longitude = lon;
    }
    if let Some(key) = &cli.api_key {
        config.api_key = key.clone();
    }

    let db_path = cli.db.clone().unwrap_or_else(default_db_path);
    let store = ForecastStore::open(&db_path)
        .with_context(|| format!("failed to open forecast store at {}", db_path.display()))?;

    let remote =
        OpenWeatherClient::new(&config.base_url).context("failed to build HTTP client")?;

    let repository: Arc<dyn ForecastRepository> = Arc::new(WeatherDataRepository::new(
        Arc::new(remote),
        Arc::new(store),
    ));

    Ok(AppContext { config, repository })
}
