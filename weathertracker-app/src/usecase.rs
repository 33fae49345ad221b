//! Use cases.
//!
//! Three thin operations between the repository and the view-models. Each
//! wraps its outcome in the `Result` envelope: continuous use cases wrap
//! every emission of the underlying live stream individually, the one-shot
//! use case returns a single envelope. Nothing in this layer panics or
//! escapes the envelope.

use std::sync::Arc;

use futures::stream::BoxStream;
use weathertracker_core::{ForecastDay, RefreshParams};

use crate::repository::{ForecastError, ForecastRepository};

// ============================================================================
// Continuous Use Cases
// ============================================================================

/// Continuous observation of the whole stored forecast.
pub struct GetForecastUseCase {
    repository: Arc<dyn ForecastRepository>,
}

impl GetForecastUseCase {
    /// Creates the use case.
    pub fn new(repository: Arc<dyn ForecastRepository>) -> Self {
        Self { repository }
    }

    /// Returns the live stream of forecast snapshots, one envelope per
    /// emission, in emission order.
    pub fn invoke(&self) -> BoxStream<'static, Result<Vec<ForecastDay>, ForecastError>> {
        self.repository.observe_all()
    }
}

/// Continuous observation of a single forecast day.
pub struct GetForecastDetailUseCase {
    repository: Arc<dyn ForecastRepository>,
}

impl GetForecastDetailUseCase {
    /// Creates the use case.
    pub fn new(repository: Arc<dyn ForecastRepository>) -> Self {
        Self { repository }
    }

    /// Returns the live stream for one identity; `Ok(None)` while the
    /// record is absent.
    pub fn invoke(
        &self,
        id: &str,
    ) -> BoxStream<'static, Result<Option<ForecastDay>, ForecastError>> {
        self.repository.observe_by_id(id)
    }
}

// ============================================================================
// One-Shot Use Case
// ============================================================================

/// One forecast refresh.
pub struct RefreshForecastUseCase {
    repository: Arc<dyn ForecastRepository>,
}

impl RefreshForecastUseCase {
    /// Creates the use case.
    pub fn new(repository: Arc<dyn ForecastRepository>) -> Self {
        Self { repository }
    }

    /// Performs the refresh and returns its envelope.
    ///
    /// # Errors
    ///
    /// Returns the repository failure unchanged; the error's `Display` is
    /// the message surfaced to the user.
    pub async fn invoke(&self, params: RefreshParams) -> Result<(), ForecastError> {
        self.repository.refresh(params).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::{stream, StreamExt};
    use weathertracker_fetch::FetchError;

    /// Repository fake with canned stream contents.
    struct ScriptedRepository {
        emissions: Vec<Result<Vec<ForecastDay>, ForecastError>>,
        refresh_result: Result<(), ForecastError>,
    }

    impl ScriptedRepository {
        fn emitting(emissions: Vec<Result<Vec<ForecastDay>, ForecastError>>) -> Self {
            Self {
                emissions,
                refresh_result: Ok(()),
            }
        }

        fn failing_refresh() -> Self {
            Self {
                emissions: Vec::new(),
                refresh_result: Err(ForecastError::Fetch(FetchError::InvalidResponse(
                    "boom".to_string(),
                ))),
            }
        }
    }

    #[async_trait]
    impl ForecastRepository for ScriptedRepository {
        fn observe_all(&self) -> BoxStream<'static, Result<Vec<ForecastDay>, ForecastError>> {
            let emissions: Vec<_> = self
                .emissions
                .iter()
                .map(|r| match r {
                    Ok(days) => Ok(days.clone()),
                    Err(_) => Err(ForecastError::Fetch(FetchError::InvalidResponse(
                        "scripted failure".to_string(),
                    ))),
                })
                .collect();
            Box::pin(stream::iter(emissions))
        }

        fn observe_by_id(
            &self,
            id: &str,
        ) -> BoxStream<'static, Result<Option<ForecastDay>, ForecastError>> {
            let id = id.to_string();
            let emissions: Vec<_> = self
                .emissions
                .iter()
                .map(|r| match r {
                    Ok(days) => Ok(days.iter().find(|d| d.id == id).cloned()),
                    Err(_) => Err(ForecastError::Fetch(FetchError::InvalidResponse(
                        "scripted failure".to_string(),
                    ))),
                })
                .collect();
            Box::pin(stream::iter(emissions))
        }

        async fn refresh(&self, _params: RefreshParams) -> Result<(), ForecastError> {
            match &self.refresh_result {
                Ok(()) => Ok(()),
                Err(_) => Err(ForecastError::Fetch(FetchError::InvalidResponse(
                    "boom".to_string(),
                ))),
            }
        }
    }

    fn day(id: &str) -> ForecastDay {
        ForecastDay {
            id: id.to_string(),
            date: 100,
            temp_day: 20.0,
            temp_min: 15.0,
            temp_max: 25.0,
            humidity: 65,
            wind_speed: 5.0,
            description: "sunny".to_string(),
            icon: "01d".to_string(),
        }
    }

    #[tokio::test]
    async fn n_emissions_produce_n_envelopes_in_order() {
        let repository = Arc::new(ScriptedRepository::emitting(vec![
            Ok(vec![day("1_0")]),
            Ok(vec![day("1_0"), day("2_1")]),
            Ok(vec![]),
        ]));
        let use_case = GetForecastUseCase::new(repository);

        let envelopes: Vec<_> = use_case.invoke().collect().await;

        assert_eq!(envelopes.len(), 3);
        assert_eq!(envelopes[0].as_ref().unwrap().len(), 1);
        assert_eq!(envelopes[1].as_ref().unwrap().len(), 2);
        assert!(envelopes[2].as_ref().unwrap().is_empty());
    }

    #[tokio::test]
    async fn subscription_failure_produces_one_failure_envelope() {
        let repository = Arc::new(ScriptedRepository::emitting(vec![Err(
            ForecastError::Fetch(FetchError::InvalidResponse("scripted failure".to_string())),
        )]));
        let use_case = GetForecastUseCase::new(repository);

        let envelopes: Vec<_> = use_case.invoke().collect().await;

        assert_eq!(envelopes.len(), 1);
        assert!(envelopes[0].is_err());
    }

    #[tokio::test]
    async fn detail_use_case_filters_by_identity() {
        let repository = Arc::new(ScriptedRepository::emitting(vec![Ok(vec![
            day("1_0"),
            day("2_1"),
        ])]));
        let use_case = GetForecastDetailUseCase::new(repository);

        let envelopes: Vec<_> = use_case.invoke("2_1").collect().await;
        assert_eq!(
            envelopes[0].as_ref().unwrap().as_ref().map(|d| d.id.clone()),
            Some("2_1".to_string())
        );

        let repository = Arc::new(ScriptedRepository::emitting(vec![Ok(vec![day("1_0")])]));
        let use_case = GetForecastDetailUseCase::new(repository);
        let envelopes: Vec<_> = use_case.invoke("9_9").collect().await;
        assert!(envelopes[0].as_ref().unwrap().is_none());
    }

    #[tokio::test]
    async fn refresh_failure_is_returned_as_envelope() {
        let use_case = RefreshForecastUseCase::new(Arc::new(ScriptedRepository::failing_refresh()));

        let result = use_case
            .invoke(RefreshParams::new(40.4983, -3.5676, "K"))
            .await;

        assert!(matches!(result, Err(ForecastError::Fetch(_))));
    }
}
