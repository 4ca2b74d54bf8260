//! Trailing-edge rate limiter for high-frequency input.
//!
//! DESIGN
//! ======
//! At most one invocation per `window_ms`. A call inside the window is parked
//! as the pending invocation, replacing whatever was parked before, so the
//! latest arguments always win. The first deferral in a window asks the host
//! for a timer; later deferrals ride on that same timer. When the timer fires
//! the host calls [`Throttle::poll`], which releases the pending arguments.
//!
//! Time is passed in by the caller (milliseconds) so the limiter has no clock
//! of its own and is deterministic under test. A clock that steps backwards
//! past the last invocation counts as an elapsed window.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

/// Outcome of [`Throttle::call`].
#[derive(Debug, Clone, PartialEq)]
pub enum Throttled<A> {
    /// The window has elapsed; run the handler now with these arguments.
    Run(A),
    /// Parked. The host should call [`Throttle::poll`] after `delay_ms`.
    Deferred { delay_ms: f64 },
    /// Parked, replacing an earlier pending call. A timer is already armed.
    Coalesced,
}

#[derive(Debug, Clone)]
pub struct Throttle<A> {
    window_ms: f64,
    last_invoked_ms: Option<f64>,
    pending: Option<A>,
}

impl<A> Throttle<A> {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last_invoked_ms: None, pending: None }
    }

    /// Offer an invocation at time `now_ms`.
    pub fn call(&mut self, now_ms: f64, args: A) -> Throttled<A> {
        match self.last_invoked_ms {
            Some(last) if self.in_window(last, now_ms) => {
                let first_in_window = self.pending.replace(args).is_none();
                if first_in_window {
                    Throttled::Deferred { delay_ms: last + self.window_ms - now_ms }
                } else {
                    Throttled::Coalesced
                }
            }
            _ => {
                self.last_invoked_ms = Some(now_ms);
                self.pending = None;
                Throttled::Run(args)
            }
        }
    }

    /// Release the pending invocation once its window has elapsed.
    ///
    /// Returns `None` when nothing is pending or the timer fired early.
    pub fn poll(&mut self, now_ms: f64) -> Option<A> {
        let last = self.last_invoked_ms?;
        if self.in_window(last, now_ms) {
            return None;
        }
        let args = self.pending.take()?;
        self.last_invoked_ms = Some(now_ms);
        Some(args)
    }

    /// Milliseconds from `now_ms` until the pending invocation is due.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.pending.as_ref()?;
        let last = self.last_invoked_ms?;
        if !self.in_window(last, now_ms) {
            return Some(0.0);
        }
        Some(last + self.window_ms - now_ms)
    }

    fn in_window(&self, last: f64, now_ms: f64) -> bool {
        let since = now_ms - last;
        (0.0..self.window_ms).contains(&since)
    }
}
