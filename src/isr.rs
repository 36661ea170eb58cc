//! What interrupt context is allowed to do.
//!
//! Code running in the GPIO handler receives an [`IsrContext`] and nothing else. It can read the
//! clock and raise the pending event, it has no way to block, sleep, log at task level, or touch
//! the LED.

use crate::debounce::{Debouncer, EdgeVerdict, IsrClock};
use crate::event::EventRaiser;

/// Capability handed to interrupt handlers
pub struct IsrContext<'a, C> {
    clock: C,
    events: EventRaiser<'a>,
}

impl<'a, C: IsrClock> IsrContext<'a, C> {
    pub fn new(clock: C, events: EventRaiser<'a>) -> Self {
        Self { clock, events }
    }

    pub fn now_ticks(&self) -> u64 {
        self.clock.now_ticks()
    }

    pub fn raise(&self) {
        self.events.raise();
    }
}

/// Run one falling edge through the debouncer, raising the pending event if it is accepted.
pub fn service_edge<C: IsrClock>(debouncer: &mut Debouncer, ctx: &IsrContext<'_, C>) -> EdgeVerdict {
    let verdict = debouncer.on_edge(ctx.now_ticks());
    if verdict == EdgeVerdict::Accepted {
        ctx.raise();
    }
    verdict
}
