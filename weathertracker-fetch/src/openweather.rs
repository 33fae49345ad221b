//! One Call API client.
//!
//! One GET against the provider's daily-forecast endpoint with a fixed
//! query parameter set: metric units, minutely/hourly/alert blocks
//! excluded.

use async_trait::async_trait;
use tracing::debug;
use weathertracker_core::OneCallResponse;

use crate::client::HttpClient;
use crate::error::FetchError;

/// Path of the One Call endpoint below the base URL.
const ONE_CALL_PATH: &str = "data/3.0/onecall";

/// Unit system requested from the provider.
const UNITS: &str = "metric";

/// Response blocks the application never reads.
const EXCLUDE: &str = "minutely,hourly,alerts";

// ============================================================================
// Remote Source Trait
// ============================================================================

/// A source of daily forecast data.
///
/// The repository consumes this seam; tests substitute a fake.
#[async_trait]
pub trait RemoteForecastSource: Send + Sync {
    /// Fetches the daily forecast for a location.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, unexpected status, or
    /// an undecodable body.
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        api_key: &str,
    ) -> Result<OneCallResponse, FetchError>;
}

// ============================================================================
// OpenWeather Client
// ============================================================================

/// One Call API client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: HttpClient,
    base_url: String,
}

impl OpenWeatherClient {
    /// Creates a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Fails only when the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            client: HttpClient::new()?,
            base_url: base_url.into(),
        })
    }

    /// Creates a client with a preconfigured [`HttpClient`].
    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{ONE_CALL_PATH}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RemoteForecastSource for OpenWeatherClient {
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        api_key: &str,
    ) -> Result<OneCallResponse, FetchError> {
        debug!(lat = latitude, lon = longitude, "Fetching daily forecast");

        let query = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("appid", api_key.to_string()),
            ("units", UNITS.to_string()),
            ("exclude", EXCLUDE.to_string()),
        ];

        self.client.get_json(&self.endpoint(), &query[..]).await
    }
}
