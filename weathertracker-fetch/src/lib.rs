// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # WeatherTracker Fetch
//!
//! Remote forecast fetching for the WeatherTracker application.
//!
//! This crate issues the single HTTP GET against the weather provider and
//! decodes the response into the wire types from `weathertracker-core`:
//!
//! - [`HttpClient`] - reqwest wrapper with timeout and retry
//! - [`RetryStrategy`] - retry policy for transient transport failures
//! - [`RemoteForecastSource`] - the seam the repository consumes (and tests
//!   fake)
//! - [`OpenWeatherClient`] - the One Call API implementation
//!
//! ## Usage
//!
//! ```ignore
//! use weathertracker_fetch::{OpenWeatherClient, RemoteForecastSource};
//!
//! let client = OpenWeatherClient::new("https://api.openweathermap.org")?;
//! let response = client.daily_forecast(40.4983, -3.5676, "key").await?;
//! println!("{} daily entries", response.daily.len());
//! ```

pub mod client;
pub mod error;
pub mod openweather;
pub mod retry;

pub use client::HttpClient;
pub use error::FetchError;
pub use openweather::{OpenWeatherClient, RemoteForecastSource};
pub use retry::RetryStrategy;
