//! Domain types for the persisted forecast.

use serde::{Deserialize, Serialize};

// ============================================================================
// Forecast Day
// ============================================================================

/// One day of forecast data as persisted in the local store.
///
/// The id is derived from the remote timestamp plus the ordinal position of
/// the entry within the refresh batch (`"<timestamp>_<index>"`), so a
/// snapshot never contains two records with the same identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Record identity, `"<timestamp>_<index>"`.
    pub id: String,
    /// Forecast date as a Unix timestamp in seconds.
    pub date: i64,
    /// Daytime temperature in °C.
    pub temp_day: f64,
    /// Minimum temperature in °C.
    pub temp_min: f64,
    /// Maximum temperature in °C.
    pub temp_max: f64,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Textual weather condition; empty when the remote entry had none.
    pub description: String,
    /// Icon key; empty when the remote entry had none.
    pub icon: String,
}

// ============================================================================
// Refresh Parameters
// ============================================================================

/// Parameters for one forecast refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshParams {
    /// Latitude of the fixed location.
    pub latitude: f64,
    /// Longitude of the fixed location.
    pub longitude: f64,
    /// API key for the weather provider.
    pub api_key: String,
}

impl RefreshParams {
    /// Creates refresh parameters.
    pub fn new(latitude: f64, longitude: f64, api_key: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            api_key: api_key.into(),
        }
    }
}
