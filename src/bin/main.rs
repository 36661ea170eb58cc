#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use button_led_toggle::{
    DEBOUNCE_MS, DEBOUNCE_TICKS,
    debounce::Debouncer,
    drivers::button::{self, BUTTON_EVENTS},
    tasks::control_task,
};
use defmt::info;
use embassy_executor::Spawner;
use esp_hal::{
    Config,
    clock::CpuClock,
    gpio::{Input, InputConfig, Io, Level, Output, OutputConfig, Pull},
    timer::systimer::SystemTimer,
};
use panic_rtt_target as _;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    #[cfg(all(feature = "rtt", feature = "defmt"))]
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(Config::default().with_cpu_clock(CpuClock::max()));
    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    // LED starts off, the control task takes it from here
    let led = Output::new(peripherals.GPIO8, Level::Low, OutputConfig::default());
    info!("MAIN: LED on GPIO8");

    // Button pulls the line low when pressed
    let mut io = Io::new(peripherals.IO_MUX);
    let input = Input::new(
        peripherals.GPIO3,
        InputConfig::default().with_pull(Pull::Up),
    );
    button::install(&mut io, input, Debouncer::new(DEBOUNCE_TICKS));
    info!(
        "MAIN: Button on GPIO3, falling edge, debounce {} ms ({} ticks)",
        DEBOUNCE_MS, DEBOUNCE_TICKS
    );

    spawner
        .spawn(control_task(&BUTTON_EVENTS, led))
        .expect("Failed to spawn control task");
}
