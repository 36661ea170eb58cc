use defmt::info;
use embassy_time::{Duration, Instant};
use esp_hal::gpio::Output;

use crate::{CONTROL_PERIOD_MS, control::Controller, event::PendingEventFlag, schedule::Deadline};

/// Periodic LED control task.
/// Every period it consumes at most one button event, flips the LED state if there was one, and
/// writes the LED state to the pin whether or not anything changed. Runs until reset.
///
/// # Parameters
/// * `events` - Pending event flag raised by the button interrupt
/// * `led` - The LED output pin
#[embassy_executor::task]
pub async fn control_task(events: &'static PendingEventFlag, mut led: Output<'static>) {
    let mut controller = Controller::new(events);
    let mut deadline = Deadline::new(Instant::now(), Duration::from_millis(CONTROL_PERIOD_MS));

    info!("CONTROL: Task started, period {} ms", CONTROL_PERIOD_MS);
    loop {
        // esp-hal pins cannot fail to write
        let Ok(_) = controller.step(&mut led);
        deadline.sleep().await;
    }
}
