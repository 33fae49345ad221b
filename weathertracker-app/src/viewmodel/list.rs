//! Forecast list view-model.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tracing::warn;
use weathertracker_core::{RefreshParams, Scope, ViewModel};

use crate::display::ForecastDayUi;
use crate::usecase::{GetForecastUseCase, RefreshForecastUseCase};

// ============================================================================
// Contract
// ============================================================================

/// Screen state of the forecast list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    /// True until the first observation emission arrives.
    pub is_loading: bool,
    /// True for the duration of each refresh call.
    pub is_refreshing: bool,
    /// The displayed forecast, date ascending.
    pub days: Vec<ForecastDayUi>,
    /// True while an error banner is shown.
    pub show_error: bool,
    /// The failure message, verbatim.
    pub error_message: String,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_refreshing: false,
            days: Vec::new(),
            show_error: false,
            error_message: String::new(),
        }
    }
}

/// Events of the forecast list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Screen became active. Idempotent: only the first one does anything.
    Init,
    /// A forecast day was clicked.
    DayClicked(String),
    /// The error banner was dismissed.
    ErrorDismissed,
}

/// Effects of the forecast list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEffect {
    /// Navigate to the detail screen for the given identity.
    NavigateToDetail(String),
}

// ============================================================================
// View-Model
// ============================================================================

/// Reducer for the forecast list screen.
///
/// On the first [`ListEvent::Init`]: starts continuous observation of the
/// stored forecast, performs one refresh, and - when an interval is
/// configured - starts the periodic auto-refresh timer.
pub struct ForecastListViewModel {
    get_forecast: Arc<GetForecastUseCase>,
    refresh_forecast: Arc<RefreshForecastUseCase>,
    params: RefreshParams,
    refresh_interval: Option<Duration>,
    initialized: bool,
}

impl ForecastListViewModel {
    /// Creates the view-model.
    pub fn new(
        get_forecast: GetForecastUseCase,
        refresh_forecast: RefreshForecastUseCase,
        params: RefreshParams,
        refresh_interval: Option<Duration>,
    ) -> Self {
        Self {
            get_forecast: Arc::new(get_forecast),
            refresh_forecast: Arc::new(refresh_forecast),
            params,
            refresh_interval,
            initialized: false,
        }
    }

    fn observe_forecast(&self, scope: &Scope<ListState, ListEffect>) {
        let use_case = Arc::clone(&self.get_forecast);
        let task_scope = scope.clone();
        scope.spawn(async move {
            let mut updates = use_case.invoke();
            while let Some(result) = updates.next().await {
                match result {
                    Ok(days) => {
                        let days = ForecastDayUi::from_days(&days);
                        task_scope.update_state(move |state| {
                            state.is_loading = false;
                            state.days = days;
                        });
                    }
                    Err(error) => {
                        warn!(error = %error, "Forecast observation failed");
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

    fn refresh_once(&self, scope: &Scope<ListState, ListEffect>) {
        let use_case = Arc::clone(&self.refresh_forecast);
        let params = self.params.clone();
        let task_scope = scope.clone();
        scope.spawn(async move {
            run_refresh(&use_case, params, &task_scope).await;
        });
    }

    fn start_auto_refresh(&self, scope: &Scope<ListState, ListEffect>, interval: Duration) {
        let use_case = Arc::clone(&self.refresh_forecast);
        let params = self.params.clone();
        let task_scope = scope.clone();
        scope.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The initial refresh already ran; skip the immediate tick.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                run_refresh(&use_case, params.clone(), &task_scope).await;
            }
        });
    }
}

/// One refresh call with `is_refreshing` held for its duration.
async fn run_refresh(
    use_case: &RefreshForecastUseCase,
    params: RefreshParams,
    scope: &Scope<ListState, ListEffect>,
) {
    scope.update_state(|state| state.is_refreshing = true);
    match use_case.invoke(params).await {
        Ok(()) => scope.update_state(|state| state.is_refreshing = false),
        Err(error) => {
            warn!(error = %error, "Forecast refresh failed");
            scope.update_state(move |state| {
                state.is_refreshing = false;
                state.show_error = true;
                state.error_message = error.to_string();
            });
        }
    }
}

impl ViewModel for ForecastListViewModel {
    type Event = ListEvent;
    type State = ListState;
    type Effect = ListEffect;

    fn initial_state(&self) -> ListState {
        ListState::default()
    }

    fn handle_event(&mut self, event: ListEvent, scope: &Scope<ListState, ListEffect>) {
        match event {
            ListEvent::Init => {
                if self.initialized {
                    return;
                }
                self.initialized = true;
                self.observe_forecast(scope);
                self.refresh_once(scope);
                if let Some(interval) = self.refresh_interval {
                    self.start_auto_refresh(scope, interval);
                }
            }
            ListEvent::DayClicked(id) => {
                scope.send_effect(ListEffect::NavigateToDetail(id));
            }
            ListEvent::ErrorDismissed => {
                scope.update_state(|state| {
                    state.show_error = false;
                    state.error_message.clear();
                });
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
