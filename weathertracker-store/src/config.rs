//! Configuration management.
//!
//! Defaults cover the fixed location (Madrid) and the public OpenWeather
//! endpoint; a JSON config file and the `OPENWEATHER_API_KEY` environment
//! variable override them.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::StoreError;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// Latitude of the fixed location.
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude of the fixed location.
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// API key for the weather provider.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the weather provider.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Auto-refresh interval in seconds; `None` disables the timer.
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
}

fn default_latitude() -> f64 {
    40.4983
}

fn default_longitude() -> f64 {
    -3.5676
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            api_key: String::new(),
            base_url: default_base_url(),
            refresh_interval_secs: None,
        }
    }
}

impl WeatherConfig {
    /// Returns the default configuration file path,
    /// `<config_dir>/weathertracker/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weathertracker")
            .join("config.json")
    }

    /// Loads configuration from the default path, then applies environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Fails when an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self, StoreError> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_env();
        Ok(config)
    }

    /// Loads configuration from a specific path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails when an existing file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Applies environment overrides (currently the API key).
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
    }

    /// Returns the auto-refresh interval as a [`Duration`], if configured.
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs.map(Duration::from_secs)
    }
}
