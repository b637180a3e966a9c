//! Time sources for transitions.
//!
//! A [`Transitionable`](crate::Transitionable) never schedules anything. It
//! reads its clock whenever it is sampled and computes where the value should
//! be at that instant. Swapping the clock is how tests and embedders control
//! time:
//!
//! - [`SystemClock`]: wall-clock time since the first use in this process.
//! - [`ManualClock`]: advanced by hand, for frame stepping and tests.
//! - [`TokioClock`]: tokio's clock, so `start_paused` tests and
//!   `tokio::time::advance` drive it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Monotonic time source, measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        EPOCH.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so keep one clone to drive the clock and hand
/// another to the values under test.
///
/// ```
/// use std::time::Duration;
/// use transition::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let shared = clock.clone();
/// clock.advance(Duration::from_millis(16));
/// assert_eq!(shared.now(), Duration::from_millis(16));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Reads `tokio::time::Instant`, which honours paused and advanced time.
#[derive(Clone, Copy, Debug)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Shared handle to the process-wide [`SystemClock`].
pub fn system() -> Rc<dyn Clock> {
    Rc::new(SystemClock)
}
