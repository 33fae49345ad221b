//! Forecast detail view-model.

use std::sync::Arc;

use futures::StreamExt;
use tracing::warn;
use weathertracker_core::{Scope, ViewModel};

use crate::display::ForecastDayUi;
use crate::usecase::GetForecastDetailUseCase;

// ============================================================================
// Contract
// ============================================================================

/// Screen state of the forecast detail.
///
/// Once loading has completed, `weather: None` means "no such record", not
/// "not yet loaded".
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    /// True until the first emission or failure arrives.
    pub is_loading: bool,
    /// The displayed record, if any.
    pub weather: Option<ForecastDayUi>,
    /// True while an error banner is shown.
    pub show_error: bool,
    /// The failure message, verbatim.
    pub error_message: String,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            is_loading: true,
            weather: None,
            show_error: false,
            error_message: String::new(),
        }
    }
}

/// Events of the forecast detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// Screen became active for the given identity.
    Init(String),
    /// The error banner was dismissed.
    ErrorDismissed,
    /// The back control was clicked.
    BackClicked,
}

/// Effects of the forecast detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEffect {
    /// Navigate back to the list screen.
    NavigateBack,
}

// ============================================================================
// View-Model
// ============================================================================

/// Reducer for the forecast detail screen.
pub struct ForecastDetailViewModel {
    get_detail: Arc<GetForecastDetailUseCase>,
}

impl ForecastDetailViewModel {
    /// Creates the view-model.
    pub fn new(get_detail: GetForecastDetailUseCase) -> Self {
        Self {
            get_detail: Arc::new(get_detail),
        }
    }

    fn observe_detail(&self, id: &str, scope: &Scope<DetailState, DetailEffect>) {
        let updates = self.get_detail.invoke(id);
        let task_scope = scope.clone();
        scope.spawn(async move {
            let mut updates = updates;
            while let Some(result) = updates.next().await {
                match result {
                    Ok(Some(day)) => {
                        let weather = ForecastDayUi::from_day(&day);
                        task_scope.update_state(move |state| {
                            state.is_loading = false;
                            state.weather = Some(weather);
                        });
                    }
                    Ok(None) => {
                        task_scope.update_state(|state| {
                            state.is_loading = false;
                            state.weather = None;
                        });
                    }
                    Err(error) => {
                        warn!(error = %error, "Forecast detail observation failed");
                        // The previously displayed record stays on screen.
                        task_scope.update_state(move |state| {
                            state.is_loading = false;
                            state.show_error = true;
                            state.error_message = error.to_string();
                        });
                    }
                }
            }
        });
    }
}

impl ViewModel for ForecastDetailViewModel {
    type Event = DetailEvent;
    type State = DetailState;
    type Effect = DetailEffect;

    fn initial_state(&self) -> DetailState {
        DetailState::default()
    }

    fn handle_event(&mut self, event: DetailEvent, scope: &Scope<DetailState, DetailEffect>) {
        match event {
            DetailEvent::Init(id) => self.observe_detail(&id, scope),
            DetailEvent::ErrorDismissed => {
                scope.update_state(|state| {
                    state.show_error = false;
                    state.error_message.clear();
                });
            }
            DetailEvent::BackClicked => {
                scope.send_effect(DetailEffect::NavigateBack);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
