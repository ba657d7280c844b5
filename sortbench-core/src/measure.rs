//! Wall-Clock Timing
//!
//! A small clock abstraction so the harness can run against the real
//! monotonic clock in production and a scripted clock in tests.

use std::time::Duration;

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Source of monotonic time readings.
///
/// `now` returns the offset from an arbitrary, fixed origin. Successive
/// readings never decrease.
pub trait Clock {
    /// Current offset from the clock's origin
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Real monotonic clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    /// Create a clock whose origin is the moment of construction
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for measuring a span of work against a [`Clock`]
pub struct Timer<C: Clock> {
    clock: C,
    start: Duration,
}

impl<C: Clock> Timer<C> {
    /// Start a new timer
    #[inline(always)]
    pub fn start(clock: C) -> Self {
        let start = clock.now();
        Self { clock, start }
    }

    /// Stop the timer and return the elapsed duration
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }
}
