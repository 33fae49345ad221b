//! Generic event/state/effect container.
//!
//! The container owns one screen's state and processes events strictly
//! sequentially: events are enqueued through [`StateContainer::submit_event`]
//! and drained by a single dedicated task, so no two reducer invocations for
//! the same container ever run concurrently. State is published through a
//! watch channel (replay-latest: every new subscriber immediately observes
//! the current value), and effects travel through a queue consumed by at
//! most one receiver, each effect delivered exactly once in emission order.
//!
//! Reducers are synchronous. Anything that suspends - observing a live data
//! stream, a network refresh, a timer - is started through [`Scope::spawn`]
//! and re-enters the container only via [`Scope::update_state`] and
//! [`Scope::send_effect`]. Dropping the container cancels the event loop and
//! every task spawned through its scope.

use std::sync::{Arc, Mutex};

use futures::Stream;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

// ============================================================================
// View-Model Trait
// ============================================================================

/// A reducer over an event/state/effect triple.
///
/// Implementations hold their collaborators (use cases, parameters) and any
/// bookkeeping that is not part of the published state, such as an
/// initialization guard. [`handle_event`](ViewModel::handle_event) runs on
/// the container's event loop; it must not block.
pub trait ViewModel: Send + 'static {
    /// User or system intents consumed by the reducer.
    type Event: std::fmt::Debug + Send + 'static;
    /// The published screen state.
    type State: Clone + Send + Sync + 'static;
    /// One-shot outcomes not representable as state.
    type Effect: Send + 'static;

    /// The state committed before any event is processed.
    fn initial_state(&self) -> Self::State;

    /// Reduces one event against the current state.
    ///
    /// State transitions go through [`Scope::update_state`], one-shot
    /// outcomes through [`Scope::send_effect`], and asynchronous work
    /// through [`Scope::spawn`].
    fn handle_event(&mut self, event: Self::Event, scope: &Scope<Self::State, Self::Effect>);
}

// ============================================================================
// Scope
// ============================================================================

/// Handle for committing state, emitting effects, and spawning tasks.
///
/// Cloneable; clones stay attached to the same container and are meant to be
/// moved into tasks started with [`Scope::spawn`].
pub struct Scope<S, F> {
    inner: Arc<ScopeInner<S, F>>,
}

struct ScopeInner<S, F> {
    state: watch::Sender<S>,
    effects: mpsc::UnboundedSender<F>,
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl<S, F> Clone for Scope<S, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, F> Scope<S, F>
where
    S: Clone + Send + Sync + 'static,
    F: Send + 'static,
{
    /// Returns a clone of the latest committed state.
    pub fn current_state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Commits a state transition and notifies all subscribers.
    pub fn update_state(&self, reduce: impl FnOnce(&mut S)) {
        self.inner.state.send_modify(reduce);
    }

    /// Emits a one-shot effect.
    ///
    /// Effects queue until the single receiver consumes them; they are never
    /// dropped while the receiver is alive.
    pub fn send_effect(&self, effect: F) {
        if self.inner.effects.send(effect).is_err() {
            warn!("Effect dropped, receiver is gone");
        }
    }

    /// Spawns a task tied to the container's lifetime.
    ///
    /// The task is cancelled when the container is dropped.
    pub fn spawn<Fut>(&self, future: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = self.inner.cancel.clone();
        self.inner.tracker.spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = future => {}
            }
        });
    }
}

// ============================================================================
// State Container
// ============================================================================

/// Owns one view-model instance and its event loop.
///
/// # Example
/// ```ignore
/// let container = StateContainer::new(ForecastListViewModel::new(deps));
/// container.submit_event(ListEvent::Init);
///
/// let mut states = container.subscribe();
/// while states.changed().await.is_ok() {
///     render(&states.borrow());
/// }
/// ```
pub struct StateContainer<V: ViewModel> {
    events: mpsc::UnboundedSender<V::Event>,
    scope: Scope<V::State, V::Effect>,
    effects: Mutex<Option<mpsc::UnboundedReceiver<V::Effect>>>,
}

impl<V: ViewModel> StateContainer<V> {
    /// Creates a container and starts its event loop.
    pub fn new(view_model: V) -> Self {
        let (state_tx, _) = watch::channel(view_model.initial_state());
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<V::Event>();

        let scope = Scope {
            inner: Arc::new(ScopeInner {
                state: state_tx,
                effects: effect_tx,
                tracker: TaskTracker::new(),
                cancel: CancellationToken::new(),
            }),
        };

        let loop_scope = scope.clone();
        let mut view_model = view_model;
        scope.spawn(async move {
            while let Some(event) = event_rx.recv().await {
                debug!(event = ?event, "Handling event");
                view_model.handle_event(event, &loop_scope);
            }
        });

        Self {
            events: event_tx,
            scope,
            effects: Mutex::new(Some(effect_rx)),
        }
    }

    /// Enqueues an event for sequential processing.
    ///
    /// Non-blocking: the call returns before the event is handled.
    pub fn submit_event(&self, event: V::Event) {
        if self.events.send(event).is_err() {
            warn!("Event dropped, container event loop has stopped");
        }
    }

    /// Returns a clone of the latest committed state.
    pub fn current_state(&self) -> V::State {
        self.scope.current_state()
    }

    /// Subscribes to state commits.
    ///
    /// The receiver starts at the current value; later commits are observed
    /// in total order (intermediate values may coalesce, never reorder).
    pub fn subscribe(&self) -> watch::Receiver<V::State> {
        self.scope.inner.state.subscribe()
    }

    /// Returns the state as a stream, starting with the current value.
    pub fn state_stream(&self) -> impl Stream<Item = V::State> + Send + use<V> {
        let receiver = self.subscribe();
        futures::stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if first {
                let value = receiver.borrow_and_update().clone();
                return Some((value, (receiver, false)));
            }
            match receiver.changed().await {
                Ok(()) => {
                    let value = receiver.borrow_and_update().clone();
                    Some((value, (receiver, false)))
                }
                Err(_) => None,
            }
        })
    }

    /// Takes the effect receiver.
    ///
    /// Returns `None` after the first call: effects are delivered to at most
    /// one consumer, exactly once each, in emission order.
    pub fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<V::Effect>> {
        self.effects.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl<V: ViewModel> Drop for StateContainer<V> {
    fn drop(&mut self) {
        self.scope.inner.cancel.cancel();
        self.scope.inner.tracker.close();
    }
}

// ============================================================================
// Tests
// ============================================================================
