// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # WeatherTracker Core
//!
//! Core types, models, and the state container for the WeatherTracker
//! application.
//!
//! This crate provides the foundational abstractions used across all other
//! WeatherTracker crates, including:
//!
//! - Domain models (forecast days, refresh parameters)
//! - Wire-format response types for the One Call API
//! - The generic event/state/effect container backing the view-models
//!
//! ## Key Types
//!
//! ### Domain Types
//! - [`ForecastDay`] - One persisted day of forecast data
//! - [`RefreshParams`] - Coordinates and API key for a refresh
//!
//! ### Wire Types
//! - [`OneCallResponse`] - Top-level One Call API response
//! - [`DailyForecast`] - One daily entry of the response
//!
//! ### State Container
//! - [`mvi::StateContainer`] - Sequential event loop, replay-latest state,
//!   one-shot effect queue
//! - [`mvi::ViewModel`] - The reducer trait concrete view-models implement
//! - [`mvi::Scope`] - Handle for committing state, emitting effects, and
//!   spawning observation/refresh tasks

pub mod models;
pub mod mvi;

// Re-export all model types
pub use models::{
    // Domain types
    ForecastDay,
    RefreshParams,
    // Wire types
    DailyForecast,
    DailyTemp,
    OneCallResponse,
    WeatherCondition,
};

// Re-export the state container primitives
pub use mvi::{Scope, StateContainer, ViewModel};
