//! Forecast repository.
//!
//! Merges the remote fetcher and the local store. Reads always come from
//! the store and re-emit on every store write; `refresh` is the only path
//! remote data takes into the application, and it replaces the stored
//! snapshot wholesale (clear then insert). A failed fetch leaves the
//! previous snapshot intact.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::{stream, Future};
use thiserror::Error;
use tracing::info;
use weathertracker_core::{DailyForecast, ForecastDay, RefreshParams};
use weathertracker_fetch::{FetchError, RemoteForecastSource};
use weathertracker_store::{ForecastStore, StoreError};

// ============================================================================
// Error
// ============================================================================

/// The single failure channel of the data layer.
///
/// Fetch and store failures converge here; the `Display` impl carries the
/// human-readable message view-models surface verbatim.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The remote fetch failed; the local snapshot is untouched.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A local store operation failed.
    #[error("Store failed: {0}")]
    Store(#[from] StoreError),
}

// ============================================================================
// Repository Trait
// ============================================================================

/// Read and refresh operations over the forecast data.
#[async_trait]
pub trait ForecastRepository: Send + Sync {
    /// Live-updating projection of the whole stored forecast, ordered by
    /// date ascending.
    ///
    /// Emits the current contents immediately, then re-emits on every store
    /// write. A query failure yields exactly one `Err` and ends the stream.
    fn observe_all(&self) -> BoxStream<'static, Result<Vec<ForecastDay>, ForecastError>>;

    /// As [`observe_all`](ForecastRepository::observe_all), filtered to one
    /// identity; emits `Ok(None)` while the record is absent.
    fn observe_by_id(
        &self,
        id: &str,
    ) -> BoxStream<'static, Result<Option<ForecastDay>, ForecastError>>;

    /// Fetches the forecast once and replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Propagates fetch and store failures; on a fetch failure the store is
    /// untouched.
    async fn refresh(&self, params: RefreshParams) -> Result<(), ForecastError>;
}

// ============================================================================
// Implementation
// ============================================================================

/// Production repository over an [`OpenWeatherClient`]-style remote source
/// and a [`ForecastStore`].
///
/// [`OpenWeatherClient`]: weathertracker_fetch::OpenWeatherClient
pub struct WeatherDataRepository {
    remote: Arc<dyn RemoteForecastSource>,
    store: Arc<ForecastStore>,
}

impl WeatherDataRepository {
    /// Creates a repository.
    pub fn new(remote: Arc<dyn RemoteForecastSource>, store: Arc<ForecastStore>) -> Self {
        Self { remote, store }
    }
}

#[async_trait]
impl ForecastRepository for WeatherDataRepository {
    fn observe_all(&self) -> BoxStream<'static, Result<Vec<ForecastDay>, ForecastError>> {
        observe(&self.store, |store| async move { store.all_days().await })
    }

    fn observe_by_id(
        &self,
        id: &str,
    ) -> BoxStream<'static, Result<Option<ForecastDay>, ForecastError>> {
        let id = id.to_string();
        observe(&self.store, move |store| {
            let id = id.clone();
            async move { store.day_by_id(&id).await }
        })
    }

    async fn refresh(&self, params: RefreshParams) -> Result<(), ForecastError> {
        let response = self
            .remote
            .daily_forecast(params.latitude, params.longitude, &params.api_key)
            .await?;

        let days: Vec<ForecastDay> = response
            .daily
            .iter()
            .enumerate()
            .map(|(index, daily)| map_daily(daily, index))
            .collect();

        self.store.replace_all(&days).await?;
        info!(days = days.len(), "Forecast refreshed");
        Ok(())
    }
}

/// Builds a live query stream over the store's change notifications:
/// query once up front, then once per notification; end after the first
/// query failure.
fn observe<T, Q, Fut>(
    store: &Arc<ForecastStore>,
    query: Q,
) -> BoxStream<'static, Result<T, ForecastError>>
where
    T: Send + 'static,
    Q: Fn(Arc<ForecastStore>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, StoreError>> + Send,
{
    let store = Arc::clone(store);
    let changes = store.subscribe();

    Box::pin(stream::unfold(
        (store, changes, query, false, false),
        |(store, mut changes, query, primed, done)| async move {
            if done {
                return None;
            }
            if primed && changes.changed().await.is_err() {
                return None;
            }
            let result = query(Arc::clone(&store)).await;
            let failed = result.is_err();
            Some((
                result.map_err(ForecastError::from),
                (store, changes, query, true, failed),
            ))
        },
    ))
}

fn map_daily(daily: &DailyForecast, index: usize) -> ForecastDay {
    let condition = daily.weather.first();
    ForecastDay {
        id: format!("{}_{}", daily.dt, index),
        date: daily.dt,
        temp_day: daily.temp.day,
        temp_min: daily.temp.min,
        temp_max: daily.temp.max,
        humidity: daily.humidity,
        wind_speed: daily.wind_speed,
        description: condition.map(|c| c.description.clone()).unwrap_or_default(),
        icon: condition.map(|c| c.icon.clone()).unwrap_or_default(),
    }
}

// ============================================================================
// Tests
// ============================================================================
