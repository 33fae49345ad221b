// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # WeatherTracker App
//!
//! The application layer of WeatherTracker: everything between the data
//! sources and the rendering surface.
//!
//! - [`repository`] - merges the remote fetcher and the local store; the
//!   store is the single source of truth, refresh replaces it wholesale
//! - [`usecase`] - the three thin operations the view-models consume
//! - [`display`] - display-ready projection of the domain model
//! - [`viewmodel`] - the list and detail view-models on top of the generic
//!   state container
//!
//! ## Data Flow
//!
//! ```text
//! Event ──→ view-model reducer ──→ state / effect
//!                 │
//!                 ├─ observe: store ──→ domain ──→ display rows
//!                 └─ refresh: remote ──→ store (clear + insert)
//! ```

pub mod display;
pub mod repository;
pub mod usecase;
pub mod viewmodel;

pub use display::ForecastDayUi;
pub use repository::{ForecastError, ForecastRepository, WeatherDataRepository};
pub use usecase::{GetForecastDetailUseCase, GetForecastUseCase, RefreshForecastUseCase};
