//! Shared fakes and helpers for view-model tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use tokio::sync::watch;
use weathertracker_core::{ForecastDay, RefreshParams};
use weathertracker_fetch::FetchError;

use crate::repository::{ForecastError, ForecastRepository};

/// In-memory repository fake with live observation semantics: observers get
/// the current snapshot immediately and a new emission per change.
pub(crate) struct FakeRepository {
    days: Arc<Mutex<Vec<ForecastDay>>>,
    changes: watch::Sender<u64>,
    refresh_calls: AtomicUsize,
    fail_refresh: bool,
    fail_observation: bool,
}

impl FakeRepository {
    pub(crate) fn with_days(days: Vec<ForecastDay>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            days: Arc::new(Mutex::new(days)),
            changes,
            refresh_calls: AtomicUsize::new(0),
            fail_refresh: false,
            fail_observation: false,
        }
    }

    pub(crate) fn failing_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    pub(crate) fn failing_observation(mut self) -> Self {
        self.fail_observation = true;
        self
    }

    pub(crate) fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    /// The message a failed refresh surfaces, for verbatim comparison.
    pub(crate) fn refresh_error_message(&self) -> String {
        refresh_error().to_string()
    }

    /// The message a failed observation surfaces, for verbatim comparison.
    pub(crate) fn observation_error_message(&self) -> String {
        observation_error().to_string()
    }

    /// Replaces the snapshot and notifies observers, like a store write.
    pub(crate) fn publish(&self, days: Vec<ForecastDay>) {
        *self.days.lock().unwrap() = days;
        self.changes.send_modify(|version| *version += 1);
    }
}

fn refresh_error() -> ForecastError {
    ForecastError::Fetch(FetchError::InvalidResponse("boom".to_string()))
}

fn observation_error() -> ForecastError {
    ForecastError::Fetch(FetchError::InvalidResponse(
        "observation failed".to_string(),
    ))
}

#[async_trait]
impl ForecastRepository for FakeRepository {
    fn observe_all(&self) -> BoxStream<'static, Result<Vec<ForecastDay>, ForecastError>> {
        if self.fail_observation {
            return Box::pin(stream::iter(vec![Err(observation_error())]));
        }
        let days = Arc::clone(&self.days);
        let changes = self.changes.subscribe();
        Box::pin(stream::unfold(
            (days, changes, false),
            |(days, mut changes, primed)| async move {
                if primed && changes.changed().await.is_err() {
                    return None;
                }
                let snapshot = days.lock().unwrap().clone();
                Some((Ok(snapshot), (days, changes, true)))
            },
        ))
    }

    fn observe_by_id(
        &self,
        id: &str,
    ) -> BoxStream<'static, Result<Option<ForecastDay>, ForecastError>> {
        if self.fail_observation {
            return Box::pin(stream::iter(vec![Err(observation_error())]));
        }
        let id = id.to_string();
        let days = Arc::clone(&self.days);
        let changes = self.changes.subscribe();
        Box::pin(stream::unfold(
            (days, changes, id, false),
            |(days, mut changes, id, primed)| async move {
                if primed && changes.changed().await.is_err() {
                    return None;
                }
                let found = days.lock().unwrap().iter().find(|d| d.id == id).cloned();
                Some((Ok(found), (days, changes, id, true)))
            },
        ))
    }

    async fn refresh(&self, _params: RefreshParams) -> Result<(), ForecastError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_refresh {
            return Err(refresh_error());
        }
        Ok(())
    }
}

/// Waits until the watched state satisfies the predicate, returning it.
pub(crate) async fn wait_until<S, P>(receiver: &mut watch::Receiver<S>, predicate: P) -> S
where
    S: Clone,
    P: Fn(&S) -> bool,
{
    let current = receiver.borrow_and_update().clone();
    if predicate(&current) {
        return current;
    }
    loop {
        receiver
            .changed()
            .await
            .expect("state channel closed before condition was met");
        let current = receiver.borrow_and_update().clone();
        if predicate(&current) {
            return current;
        }
    }
}
