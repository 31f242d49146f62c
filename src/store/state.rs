//! Shared `loading` / `error` state for UI binding.
//!
//! `loading` is derived from a count of in-flight calls, so overlapping
//! calls cannot clear it while another call is still outstanding. `error`
//! holds the message of the most recent failure and is only cleared
//! explicitly.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A point-in-time copy of the store state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    /// `true` while at least one guarded call is in flight.
    pub loading: bool,
    /// Number of guarded calls in flight.
    pub in_flight: usize,
    /// Message of the most recent failed call, if not cleared since.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    in_flight: usize,
    error: Option<String>,
}

/// State shared by every clone of a [`ResourceClient`](crate::ResourceClient).
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    inner: Arc<Mutex<Inner>>,
}

impl StoreState {
    /// Creates an idle state with no recorded error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the counters half-written,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks a call as started; `loading` stays set until the guard drops.
    #[must_use = "loading is released when the guard is dropped"]
    pub fn begin(&self) -> LoadingGuard {
        self.lock().in_flight += 1;
        LoadingGuard {
            state: self.clone(),
        }
    }

    /// Returns `true` while any guarded call is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.lock().in_flight > 0
    }

    /// Returns the most recent failure message.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Records a failure message, replacing any previous one.
    pub fn record_error(&self, message: impl Into<String>) {
        self.lock().error = Some(message.into());
    }

    /// Clears the recorded failure message.
    pub fn clear_error(&self) {
        self.lock().error = None;
    }

    /// Returns a consistent copy of the whole state.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let inner = self.lock();
        StoreSnapshot {
            loading: inner.in_flight > 0,
            in_flight: inner.in_flight,
            error: inner.error.clone(),
        }
    }
}

/// Releases one in-flight slot when dropped, on every exit path.
#[derive(Debug)]
pub struct LoadingGuard {
    state: StoreState,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut inner = self.state.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
    }
}

// Verify StoreState is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreState>();
    assert_send_sync::<LoadingGuard>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = StoreState::new();
        assert_eq!(state.snapshot(), StoreSnapshot::default());
        assert!(!state.loading());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let state = StoreState::new();
        {
            let _guard = state.begin();
            assert!(state.loading());
        }
        assert!(!state.loading());
    }

    #[test]
    fn test_overlapping_guards_keep_loading_until_last_drop() {
        let state = StoreState::new();
        let first = state.begin();
        let second = state.begin();
        assert_eq!(state.snapshot().in_flight, 2);

        drop(first);
        assert!(state.loading(), "second call is still in flight");

        drop(second);
        assert!(!state.loading());
    }

    #[test]
    fn test_guard_releases_during_panic_unwind() {
        let state = StoreState::new();
        let cloned = state.clone();

        let result = std::panic::catch_unwind(move || {
            let _guard = cloned.begin();
            panic!("boom");
        });

        assert!(result.is_err());
        assert!(!state.loading());
    }

    #[test]
    fn test_error_persists_until_cleared() {
        let state = StoreState::new();
        state.record_error("Request failed with status code 500");

        {
            let _guard = state.begin();
        }
        assert_eq!(
            state.error().as_deref(),
            Some("Request failed with status code 500")
        );

        state.record_error("later failure");
        assert_eq!(state.error().as_deref(), Some("later failure"));

        state.clear_error();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let state = StoreState::new();
        let other = state.clone();

        let _guard = other.begin();
        other.record_error("shared");

        assert!(state.loading());
        assert_eq!(state.error().as_deref(), Some("shared"));
    }
}
