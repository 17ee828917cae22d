//! Session time budget
//!
//! A [`TimeGuard`] answers one question: has the session run out of time?
//! [`GameTimer`] enforces a fixed budget measured from its construction;
//! [`Unlimited`] never expires.

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::time::{Duration, Instant};

/// Reports whether a session's time budget is exhausted
pub trait TimeGuard {
    fn is_time_up(&self) -> bool;
}

/// Guard for sessions without a time limit
#[derive(Debug, Default, Clone, Copy)]
pub struct Unlimited;

impl TimeGuard for Unlimited {
    fn is_time_up(&self) -> bool {
        false
    }
}

/// Fixed time budget starting at construction
///
/// Time is up only once elapsed time is strictly greater than the limit; a
/// check landing exactly on the limit still passes.
#[derive(Debug, Clone)]
pub struct GameTimer<C: Clock = SystemClock> {
    limit: Duration,
    start: Instant,
    clock: C,
}

impl GameTimer<SystemClock> {
    /// Start a timer against the system clock
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> GameTimer<C> {
    pub fn with_clock(limit: Duration, clock: C) -> Self {
        let start = clock.now();
        Self { limit, start, clock }
    }

    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Time spent since the timer started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }
}

impl<C: Clock> TimeGuard for GameTimer<C> {
    fn is_time_up(&self) -> bool {
        self.elapsed() > self.limit
    }
}

impl<G: TimeGuard + ?Sized> TimeGuard for Box<G> {
    fn is_time_up(&self) -> bool {
        (**self).is_time_up()
    }
}
