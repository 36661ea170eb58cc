//! The single flag shared between the button interrupt and the control task.
//!
//! The interrupt only ever sets the flag, the control task only ever tests and clears it. Those
//! two operations are all that is exposed, so a lost update cannot be expressed.

use portable_atomic::{AtomicBool, Ordering};

/// "An accepted button edge has occurred and has not been consumed yet."
///
/// The ESP32-C3 has no native atomic read-modify-write, so the flag is a
/// [`portable_atomic::AtomicBool`] whose `swap` is emulated for the single core.
pub struct PendingEventFlag {
    pending: AtomicBool,
}

impl Default for PendingEventFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingEventFlag {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark an event as pending. Pairs with the acquire in [`Self::test_and_clear`].
    pub fn set(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Returns true exactly once per pending event and leaves the flag cleared.
    pub fn test_and_clear(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Peek without consuming.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Handle given to interrupt context. It can raise the flag but never observe or clear it.
    pub fn raiser(&self) -> EventRaiser<'_> {
        EventRaiser { flag: self }
    }
}

/// Write-only view of a [`PendingEventFlag`]
#[derive(Clone, Copy)]
pub struct EventRaiser<'a> {
    flag: &'a PendingEventFlag,
}

impl EventRaiser<'_> {
    pub fn raise(&self) {
        self.flag.set();
    }
}
