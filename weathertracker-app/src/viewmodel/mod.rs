//! The two concrete view-models on top of the generic state container.
//!
//! Each screen owns one [`StateContainer`] holding one of these reducers;
//! the state/event/effect contracts live next to their view-model.
//!
//! [`StateContainer`]: weathertracker_core::StateContainer

mod detail;
mod list;

#[cfg(test)]
pub(crate) mod test_support;

pub use detail::{DetailEffect, DetailEvent, DetailState, ForecastDetailViewModel};
pub use list::{ForecastListViewModel, ListEffect, ListEvent, ListState};
