//! Trailing-edge debouncer for input changes
//!
//! Holds at most one pending value. Every call to [`Debouncer::schedule`]
//! replaces the value and restarts the quiet window, so intermediate values
//! are superseded and never delivered. The engine loop sleeps until
//! [`Debouncer::deadline`] and then calls [`Debouncer::poll`].

use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Coalesces bursts of input into a single trailing invocation
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window in milliseconds
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::from_millis(window_ms),
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Replace the pending value and restart the timer from `now`
    pub fn schedule(&mut self, value: String, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// When the pending value becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its quiet window has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value immediately, ignoring the window
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without delivering it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
