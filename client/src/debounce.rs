//! Debounced uniqueness probes
//!
//! Name/email/catalogue-number fields check their value against the server
//! on every keystroke; the [`Debouncer`] rate-limits those probes so only
//! the latest value in a burst reaches the network. The debounce only
//! delays the network call, never the form state itself.
//!
//! Known limitation, carried over from the original behavior: a superseded
//! probe whose response arrives after a newer probe's response still
//! overwrites the uniqueness flag (last write wins). The flag may briefly
//! hold stale data.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Rate limiter for keystroke-driven network probes
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    seq: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            seq: AtomicU64::new(0),
        }
    }

    /// Wait out the debounce window.
    ///
    /// Returns false when a newer call arrived during the wait; the caller
    /// should then skip its network probe.
    pub async fn settle(&self) -> bool {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.seq.load(Ordering::SeqCst) == ticket
    }

    /// Run `probe` only if this call is still the latest after the window;
    /// returns None when it was superseded and the probe was skipped.
    pub async fn run<F, Fut, T>(&self, probe: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if self.settle().await {
            Some(probe().await)
        } else {
            None
        }
    }
}

/// Deferred-validation state of a uniqueness-checked field.
///
/// Submission stays disabled while a probe is in flight or after one came
/// back negative; this is a disabled state, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniquenessState {
    pub checking: bool,
    pub unique: Option<bool>,
}

impl UniquenessState {
    /// A probe has been issued for the current field value
    pub fn begin(&mut self) {
        self.checking = true;
    }

    /// A probe resolved; last write wins
    pub fn resolve(&mut self, unique: bool) {
        self.checking = false;
        self.unique = Some(unique);
    }

    /// Whether the surrounding form may be submitted
    pub fn submit_enabled(&self) -> bool {
        !self.checking && self.unique != Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_gating() {
        let mut state = UniquenessState::default();
        // No probe yet: nothing blocks submission
        assert!(state.submit_enabled());

        state.begin();
        assert!(!state.submit_enabled());

        state.resolve(false);
        assert!(!state.submit_enabled());

        state.begin();
        state.resolve(true);
        assert!(state.submit_enabled());
    }
}
