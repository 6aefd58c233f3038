//! Wall-clock source for elapsed-time reporting.

use std::time::Instant;

/// A monotonic time reader.
///
/// Reports the current time in fractional seconds since an arbitrary
/// fixed origin. An entry time captured from one clock is only meaningful
/// against `now()` readings from the same clock.
pub trait Clock {
    /// Seconds since this clock's origin.
    fn now(&self) -> f64;
}

/// Monotonic clock backed by [`std::time::Instant`].
///
/// The origin is fixed at construction, so `now()` readings are
/// comparable for the lifetime of the clock and never go backwards.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}
