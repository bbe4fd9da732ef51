//! Debounced value on tokio timers.
//!
//! A [`Debouncer`] owns at most one pending timer. Setting a new value
//! cancels the pending one before scheduling its own, and dropping the
//! debouncer cancels whatever is left.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Value that follows its input once the input has been stable for `delay`.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    value: Arc<watch::Sender<T>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Debouncer<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            delay,
            value: Arc::new(tx),
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `input` to become the value after the delay.
    ///
    /// Any update still waiting is cancelled, not queued.
    pub fn set(&self, input: T) {
        let deadline = Instant::now() + self.delay;
        let value = Arc::clone(&self.value);

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            value.send_if_modified(|current| {
                if *current == input {
                    return false;
                }
                *current = input;
                true
            });
        }));
    }

    /// Drop any pending update and commit `value` immediately.
    ///
    /// Subscribers are notified only if the committed value changed.
    pub fn reset(&self, value: T) {
        self.cancel();
        self.value.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });
    }

    /// The last committed value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Receiver notified each time a new value is committed.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.value.subscribe()
    }

    /// Whether an update is still waiting for its timer.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Drop the pending update, if any, keeping the current value.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
