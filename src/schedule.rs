//! Fixed-period scheduling against absolute deadlines.

use embassy_time::{Duration, Instant, Timer};

/// Deadline accumulator owned by a periodic task.
///
/// Each wake time is the previous wake time plus the period, never "now plus the period", so the
/// time spent doing work in an iteration does not push later iterations back. If the task falls
/// behind, the timer for a past deadline completes immediately and the schedule catches up.
pub struct Deadline {
    next: Instant,
    period: Duration,
}

impl Deadline {
    /// The first wake-up is one `period` after `start`
    pub fn new(start: Instant, period: Duration) -> Self {
        Self {
            next: start + period,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The absolute time of the next wake-up
    pub fn next(&self) -> Instant {
        self.next
    }

    /// Returns the deadline to sleep until and moves the accumulator on by one period.
    pub fn advance(&mut self) -> Instant {
        let at = self.next;
        self.next += self.period;
        at
    }

    /// Suspend until the current deadline, then advance it.
    pub async fn sleep(&mut self) {
        Timer::at(self.advance()).await;
    }
}
