#![no_std]

pub mod control;
pub mod debounce;
pub mod drivers;
pub mod event;
pub mod isr;
pub mod schedule;
pub mod tasks;

pub use tasks::control_task;

use embassy_time::Duration;

/// Minimum quiet time on the button line before a falling edge counts as a press, in milliseconds
pub const DEBOUNCE_MS: u64 = 500;

/// [`DEBOUNCE_MS`] in time driver ticks
pub const DEBOUNCE_TICKS: u64 = Duration::from_millis(DEBOUNCE_MS).as_ticks();

/// The LED control loop period in milliseconds
pub const CONTROL_PERIOD_MS: u64 = 500;
