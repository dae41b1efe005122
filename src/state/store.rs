//! Observable store holding the [`AppState`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::trace;

use super::{Action, AppState, reduce};

/// Callback invoked with the new state after every dispatch.
pub type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the application state and notifies subscribers of every change.
///
/// Dispatches are serialized: the reducer runs under the state lock, so two
/// dispatches never interleave. Subscribers are called after the lock is
/// released, in subscription order, and may dispatch again themselves.
pub struct Store {
    state: RwLock<AppState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwLock::new(initial),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `action` and notifies every subscriber. Returns the new state.
    pub fn dispatch(&self, action: Action) -> AppState {
        trace!(?action, "Dispatching action");

        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = reduce(&state, action);
            *state = next.clone();
            next
        };

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&next);
        }

        next
    }

    /// Registers a listener called after every dispatch.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
