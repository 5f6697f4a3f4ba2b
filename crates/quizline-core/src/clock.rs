//! Monotonic clock abstraction for elapsed-time accounting.
//!
//! The engine only ever compares two readings of the same clock, so a clock
//! reports time since an arbitrary origin rather than wall-clock time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since this clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Real time, backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test can keep one handle and give the
/// other to an engine.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Convenience for `advance(Duration::from_millis(ms))`.
    pub fn advance_millis(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Whole-second stopwatch with sub-second carry.
///
/// Each `settle` adds the whole seconds since the last accounted instant and
/// moves that instant forward by exactly those seconds, so the remainder is
/// kept for the next call regardless of how often it runs.
#[derive(Debug, Clone, Default)]
pub(crate) struct Stopwatch {
    mark: Option<Duration>,
    seconds: u64,
}

impl Stopwatch {
    /// Reset to zero and begin counting from `now`.
    pub(crate) fn start(&mut self, now: Duration) {
        self.mark = Some(now);
        self.seconds = 0;
    }

    /// Account whole seconds up to `now`. No effect when stopped.
    pub(crate) fn settle(&mut self, now: Duration) {
        let Some(mark) = self.mark else {
            return;
        };
        let whole = now.saturating_sub(mark).as_secs();
        if whole > 0 {
            self.seconds += whole;
            self.mark = Some(mark + Duration::from_secs(whole));
        }
    }

    /// Settle up to `now`, then freeze.
    pub(crate) fn stop(&mut self, now: Duration) {
        self.settle(now);
        self.mark = None;
    }

    pub(crate) fn seconds(&self) -> u64 {
        self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance_millis(1500);
        assert_eq!(clock.now(), ms(1500));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn carries_sub_second_remainder() {
        let mut watch = Stopwatch::default();
        watch.start(ms(0));
        // Ten 300ms steps is exactly three whole seconds.
        for step in 1..=10 {
            watch.settle(ms(step * 300));
        }
        assert_eq!(watch.seconds(), 3);
        watch.settle(ms(3999));
        assert_eq!(watch.seconds(), 3);
        watch.settle(ms(4000));
        assert_eq!(watch.seconds(), 4);
    }

    #[test]
    fn large_gap_counts_every_second() {
        let mut watch = Stopwatch::default();
        watch.start(ms(250));
        watch.settle(ms(7_900));
        assert_eq!(watch.seconds(), 7);
        watch.settle(ms(8_250));
        assert_eq!(watch.seconds(), 8);
    }

    #[test]
    fn stop_freezes_count() {
        let mut watch = Stopwatch::default();
        watch.start(ms(0));
        watch.stop(ms(2_500));
        assert_eq!(watch.seconds(), 2);
        watch.settle(ms(60_000));
        assert_eq!(watch.seconds(), 2);
    }

    #[test]
    fn restart_resets() {
        let mut watch = Stopwatch::default();
        watch.start(ms(0));
        watch.stop(ms(5_700));
        watch.start(ms(10_000));
        assert_eq!(watch.seconds(), 0);
        watch.settle(ms(10_999));
        assert_eq!(watch.seconds(), 0);
        watch.settle(ms(11_000));
        assert_eq!(watch.seconds(), 1);
    }
}
