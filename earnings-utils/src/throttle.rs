//! Trailing-edge throttle driven by an external timer.
//!
//! The throttle never sleeps itself. The first call in a quiet period opens a
//! window and tells the caller to arm one timer; later calls inside the window
//! only replace the pending value. When the timer fires, [`Throttle::fire`]
//! closes the window and hands back the most recent value. Missed calls are
//! not queued, so at most one value comes out per window.

/// Rate limiter keeping only the latest value seen in the current window.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    latest: Option<T>,
    armed: bool,
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Throttle<T> {
    pub fn new() -> Self {
        Self {
            latest: None,
            armed: false,
        }
    }

    /// Record a call.
    ///
    /// Returns `true` when this call opened a new window, meaning the caller
    /// must arm a timer and call [`Throttle::fire`] once it elapses.
    pub fn call(&mut self, value: T) -> bool {
        self.latest = Some(value);
        if self.armed {
            false
        } else {
            self.armed = true;
            true
        }
    }

    /// Close the current window and take the latest recorded value.
    pub fn fire(&mut self) -> Option<T> {
        self.armed = false;
        self.latest.take()
    }
}
