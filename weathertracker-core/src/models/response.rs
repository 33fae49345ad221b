//! Wire-format types for the One Call API response.
//!
//! Deserialize-only: these types never travel back to the remote side.

use serde::Deserialize;

// ============================================================================
// One Call Response
// ============================================================================

/// Top-level One Call API response.
#[derive(Debug, Clone, Deserialize)]
pub struct OneCallResponse {
    /// Latitude the response was resolved for.
    pub lat: f64,
    /// Longitude the response was resolved for.
    pub lon: f64,
    /// IANA timezone name of the location.
    pub timezone: String,
    /// Daily forecast entries.
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

/// One daily entry of the One Call response.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    /// Forecast date as a Unix timestamp in seconds.
    pub dt: i64,
    /// Temperature block.
    pub temp: DailyTemp,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Weather conditions; the first entry is the one displayed.
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

/// Daily temperature block.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyTemp {
    /// Daytime temperature in °C.
    pub day: f64,
    /// Minimum temperature in °C.
    pub min: f64,
    /// Maximum temperature in °C.
    pub max: f64,
}

/// One weather condition of a daily entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// Human-readable condition description.
    #[serde(default)]
    pub description: String,
    /// Icon key for the condition.
    #[serde(default)]
    pub icon: String,
}
