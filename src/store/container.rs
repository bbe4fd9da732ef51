//! Injectable state container.
//!
//! Holds one state value and runs every intent through the reducer. The
//! container is cheap to clone; clones share the same state.

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::watch;

use super::mvi::Reducer;

/// Single-writer state container for reducer `R`.
///
/// `dispatch` runs the reducer to completion under the channel's write lock,
/// so intents are applied one at a time in dispatch order. Subscribers are
/// notified after each dispatch.
pub struct Store<R: Reducer> {
    state: Arc<watch::Sender<R::State>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            state: Arc::new(tx),
            _reducer: PhantomData,
        }
    }

    /// Apply `intent` to the current state.
    pub fn dispatch(&self, intent: R::Intent) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = R::reduce(current, intent);
        });
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.borrow())
    }

    /// Receiver that observes every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.subscribe()
    }
}
