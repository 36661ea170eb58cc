use core::cell::RefCell;

use critical_section::Mutex;
use defmt::trace;
use esp_hal::{
    gpio::{Event, Input, Io},
    handler, ram,
};

use crate::{
    debounce::{Debouncer, SystemClock},
    event::PendingEventFlag,
    isr::{IsrContext, service_edge},
};

/// Raised by the button interrupt on every accepted press, consumed by the control task
pub static BUTTON_EVENTS: PendingEventFlag = PendingEventFlag::new();

/// Everything the interrupt handler owns. Nothing outside this module can reach it once installed.
struct ButtonIsr {
    button: Input<'static>,
    debouncer: Debouncer,
}

static BUTTON_ISR: Mutex<RefCell<Option<ButtonIsr>>> = Mutex::new(RefCell::new(None));

/// Hand the button pin to the GPIO interrupt and start listening for falling edges.
///
/// # Parameters
/// * `io` - The IO_MUX driver, used to register the GPIO interrupt handler
/// * `button` - Input pin, expected to be configured with a pull-up so a press pulls it low
/// * `debouncer` - Initial debounce state for the handler to own
pub fn install(io: &mut Io<'_>, mut button: Input<'static>, debouncer: Debouncer) {
    io.set_interrupt_handler(button_interrupt);
    critical_section::with(|cs| {
        button.listen(Event::FallingEdge);
        BUTTON_ISR.borrow_ref_mut(cs).replace(ButtonIsr { button, debouncer });
    });
}

#[handler]
#[ram]
fn button_interrupt() {
    critical_section::with(|cs| {
        let mut state = BUTTON_ISR.borrow_ref_mut(cs);
        let Some(isr) = state.as_mut() else {
            return;
        };
        // The GPIO interrupt is shared by every pin
        if !isr.button.is_interrupt_set() {
            return;
        }
        isr.button.clear_interrupt();

        let ctx = IsrContext::new(SystemClock, BUTTON_EVENTS.raiser());
        let verdict = service_edge(&mut isr.debouncer, &ctx);
        trace!("BUTTON: edge {}", verdict);
    });
}
