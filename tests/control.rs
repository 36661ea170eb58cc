//! LED state machine and fixed-period scheduling.

#![no_std]
#![no_main]

use panic_rtt_target as _;

esp_bootloader_esp_idf::esp_app_desc!();

#[cfg(test)]
#[embedded_test::tests(default_timeout = 5, executor = esp_hal_embassy::Executor::new())]
mod tests {
    use core::convert::Infallible;

    use button_led_toggle::{
        control::{Controller, LedState},
        event::PendingEventFlag,
        schedule::Deadline,
    };
    use embassy_time::{Duration, Instant, Timer};
    use embedded_hal::digital::{ErrorType, OutputPin, PinState};
    use esp_hal::timer::systimer::SystemTimer;

    /// Output pin that counts what was written to it
    #[derive(Default)]
    struct RecordingPin {
        lows: u32,
        highs: u32,
        last: Option<PinState>,
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.lows += 1;
            self.last = Some(PinState::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.highs += 1;
            self.last = Some(PinState::High);
            Ok(())
        }
    }

    #[init]
    fn init() {
        rtt_target::rtt_init_defmt!();
        let peripherals = esp_hal::init(esp_hal::Config::default());
        let timer0 = SystemTimer::new(peripherals.SYSTIMER);
        esp_hal_embassy::init(timer0.alarm0);
    }

    #[test]
    fn led_starts_off() {
        let flag = PendingEventFlag::new();
        let controller = Controller::new(&flag);
        assert_eq!(controller.led(), LedState::Off);
        assert_eq!(LedState::default(), LedState::Off);
    }

    #[test]
    fn no_event_never_changes_state() {
        let flag = PendingEventFlag::new();
        let mut controller = Controller::new(&flag);
        let mut pin = RecordingPin::default();

        for _ in 0..10 {
            assert_eq!(controller.step(&mut pin), Ok(None));
            assert_eq!(controller.led(), LedState::Off);
        }
    }

    #[test]
    fn idle_loop_rewrites_low_every_cycle() {
        let flag = PendingEventFlag::new();
        let mut controller = Controller::new(&flag);
        let mut pin = RecordingPin::default();

        for _ in 0..5 {
            let _ = controller.step(&mut pin);
        }
        assert_eq!(pin.lows, 5);
        assert_eq!(pin.highs, 0);
        assert_eq!(pin.last, Some(PinState::Low));
    }

    #[test]
    fn one_event_toggles_once() {
        let flag = PendingEventFlag::new();
        let mut controller = Controller::new(&flag);
        let mut pin = RecordingPin::default();

        flag.set();
        assert_eq!(controller.step(&mut pin), Ok(Some(LedState::On)));
        assert!(!flag.is_pending());
        assert_eq!(controller.step(&mut pin), Ok(None));
        assert_eq!(controller.led(), LedState::On);
        assert_eq!(pin.highs, 2);
        assert_eq!(pin.lows, 0);
    }

    #[test]
    fn consumed_events_alternate_the_led() {
        let flag = PendingEventFlag::new();
        let mut controller = Controller::new(&flag);

        let mut previous = controller.led();
        for _ in 0..6 {
            flag.set();
            let now = controller.poll_event();
            assert_eq!(now, Some(previous.toggled()));
            previous = controller.led();
        }
        assert_eq!(controller.led(), LedState::Off);
    }

    #[test]
    fn led_state_maps_to_pin_level() {
        assert_eq!(PinState::from(LedState::On), PinState::High);
        assert_eq!(PinState::from(LedState::Off), PinState::Low);
        assert_eq!(LedState::On.as_str(), "ON");
        assert_eq!(LedState::Off.as_str(), "OFF");
    }

    #[test]
    fn deadline_advances_by_whole_periods() {
        let start = Instant::from_ticks(1_000);
        let period = Duration::from_millis(500);
        let mut deadline = Deadline::new(start, period);

        assert_eq!(deadline.next(), start + period);
        assert_eq!(deadline.advance(), start + period);
        assert_eq!(deadline.advance(), start + period * 2);
        assert_eq!(deadline.next(), start + period * 3);
    }

    #[test]
    async fn event_mid_cycle_is_seen_on_next_iteration() {
        static FLAG: PendingEventFlag = PendingEventFlag::new();
        let mut controller = Controller::new(&FLAG);
        let mut pin = RecordingPin::default();
        let mut deadline = Deadline::new(Instant::now(), Duration::from_millis(100));

        // Iteration at t=0
        assert_eq!(controller.step(&mut pin), Ok(None));

        // Event arrives halfway through the period, nothing reacts until the next wake-up
        Timer::after_millis(50).await;
        FLAG.set();
        assert_eq!(controller.led(), LedState::Off);
        assert_eq!(pin.last, Some(PinState::Low));

        deadline.sleep().await;
        assert_eq!(controller.step(&mut pin), Ok(Some(LedState::On)));
        assert_eq!(pin.last, Some(PinState::High));
    }

    #[test]
    async fn slow_iterations_do_not_accumulate_drift() {
        let start = Instant::now();
        let mut deadline = Deadline::new(start, Duration::from_millis(50));

        for _ in 0..4 {
            // Simulated work inside the iteration
            Timer::after_millis(20).await;
            deadline.sleep().await;
        }

        let elapsed = Instant::now() - start;
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_millis(220));
    }
}
