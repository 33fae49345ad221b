// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # WeatherTracker Store
//!
//! Local persistence and configuration for the WeatherTracker application.
//!
//! This crate provides:
//!
//! - **`ForecastStore`**: the single source of truth - a SQLite table of
//!   forecast days with watch-channel change notification
//! - **`WeatherConfig`**: application configuration with file and
//!   environment loading
//!
//! ## Usage
//!
//! ```ignore
//! use weathertracker_store::ForecastStore;
//!
//! let store = ForecastStore::open_in_memory()?;
//!
//! // Subscribe to changes
//! let mut rx = store.subscribe();
//!
//! store.replace_all(&days).await?;
//! assert!(rx.changed().await.is_ok());
//! ```

pub mod config;
pub mod error;
pub mod forecast_store;

pub use config::WeatherConfig;
pub use error::StoreError;
pub use forecast_store::{default_db_path, ForecastStore};
