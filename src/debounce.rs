//! Time based debounce filter for a falling-edge interrupt.
//!
//! Every edge moves the reference point forward, accepted or not. A burst of bounces therefore
//! keeps pushing the window out, and a press is only recognised once the line has been quiet for
//! longer than the threshold since the *last* bounce.

use embassy_time::Instant;

/// Monotonic tick source that is safe to read from interrupt context.
pub trait IsrClock {
    fn now_ticks(&self) -> u64;
}

/// Reads the embassy time driver counter. On the ESP32-C3 this is the SYSTIMER, which can be read
/// from any context without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IsrClock for SystemClock {
    fn now_ticks(&self) -> u64 {
        Instant::now().as_ticks()
    }
}

/// Outcome of feeding one edge to the [`Debouncer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum EdgeVerdict {
    /// Far enough from the previous edge to count as a press
    Accepted,
    /// Bounce, ignored
    Rejected,
}

/// Debounce state owned by the interrupt handler.
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// An edge must be strictly more than this many ticks after the previous one
    threshold_ticks: u64,
    /// Tick count of the previous edge. `None` until the first edge after boot, which is always
    /// accepted.
    last_edge: Option<u64>,
}

impl Debouncer {
    /// # Parameters
    /// * `threshold_ticks` - Minimum quiet gap in ticks, see [`crate::DEBOUNCE_TICKS`]
    pub const fn new(threshold_ticks: u64) -> Self {
        Self {
            threshold_ticks,
            last_edge: None,
        }
    }

    pub fn threshold_ticks(&self) -> u64 {
        self.threshold_ticks
    }

    /// Tick count of the last edge seen, accepted or rejected
    pub fn last_edge(&self) -> Option<u64> {
        self.last_edge
    }

    /// Classify an edge observed at `now` and record it as the new reference point.
    ///
    /// The gap is computed with wrapping subtraction so a counter rollover does not produce a
    /// spurious rejection.
    pub fn on_edge(&mut self, now: u64) -> EdgeVerdict {
        let verdict = match self.last_edge {
            Some(last) if now.wrapping_sub(last) <= self.threshold_ticks => EdgeVerdict::Rejected,
            _ => EdgeVerdict::Accepted,
        };
        self.last_edge = Some(now);
        verdict
    }
}
