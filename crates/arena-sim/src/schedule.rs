//! Fixed-interval scheduling for spawns decoupled from the tick rate.
//!
//! Enemy fire and pickup spawning run on repeating timers. Rather than
//! independent wall-clock callbacks, the timers are polled against
//! simulation time once per tick, so every mutation flows through the
//! single tick loop.

/// A repeating timer measured in simulation seconds.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_secs: f64,
    next_due_secs: f64,
}

impl IntervalTimer {
    /// Create a timer that first fires `period_secs` after time zero.
    pub fn new(period_secs: f64) -> Self {
        Self {
            period_secs,
            next_due_secs: period_secs,
        }
    }

    /// Returns true if the timer is due at `elapsed_secs`, advancing the
    /// deadline by one period. Fires at most once per poll; the fixed tick
    /// rate is far finer than any period used here.
    pub fn poll(&mut self, elapsed_secs: f64) -> bool {
        if elapsed_secs >= self.next_due_secs {
            self.next_due_secs += self.period_secs;
            true
        } else {
            false
        }
    }

    /// Reset the deadline to one full period from time zero.
    pub fn reset(&mut self) {
        self.next_due_secs = self.period_secs;
    }
}
