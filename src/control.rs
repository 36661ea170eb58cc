//! The LED state machine driven by the periodic control task.

use defmt::{Format, info};
use embedded_hal::digital::{OutputPin, PinState};

use crate::event::PendingEventFlag;

/// Commanded LED level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Format)]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    pub fn toggled(self) -> Self {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == LedState::On
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedState::Off => "OFF",
            LedState::On => "ON",
        }
    }
}

impl From<LedState> for PinState {
    fn from(state: LedState) -> Self {
        PinState::from(state.is_on())
    }
}

/// Consumes button events and owns the LED state.
///
/// The LED state changes only inside [`Controller::poll_event`], once per consumed event.
pub struct Controller<'a> {
    events: &'a PendingEventFlag,
    led: LedState,
}

impl<'a> Controller<'a> {
    /// Starts with the LED off
    pub const fn new(events: &'a PendingEventFlag) -> Self {
        Self {
            events,
            led: LedState::Off,
        }
    }

    pub fn led(&self) -> LedState {
        self.led
    }

    /// Consume a pending event if there is one and flip the LED state.
    ///
    /// # Returns
    /// The new state if an event was consumed, `None` otherwise
    pub fn poll_event(&mut self) -> Option<LedState> {
        if !self.events.test_and_clear() {
            return None;
        }
        self.led = self.led.toggled();
        info!("CONTROL: Turning the LED {}!", self.led.as_str());
        Some(self.led)
    }

    /// Write the current state to the pin. Done every cycle, not only on change, so a glitch on
    /// the output is corrected within one period.
    pub fn drive<P: OutputPin>(&self, pin: &mut P) -> Result<(), P::Error> {
        pin.set_state(self.led.into())
    }

    /// One control iteration: consume, then drive.
    pub fn step<P: OutputPin>(&mut self, pin: &mut P) -> Result<Option<LedState>, P::Error> {
        let toggled = self.poll_event();
        self.drive(pin)?;
        Ok(toggled)
    }
}
