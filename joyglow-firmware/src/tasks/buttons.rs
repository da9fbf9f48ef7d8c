//! Button task
//!
//! Waits for a falling edge on either button, stamps it with the uptime
//! and runs it through the debouncer. Accepted actions are published to
//! the shared flags; the green LED follows its flag immediately.

use defmt::*;
use embassy_futures::select::select;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;

use joyglow_core::traits::StatusLed;
use joyglow_core::{ButtonLevels, Debouncer};
use joyglow_drivers::led::GpioLed;

use crate::channels::FLAGS;

/// Pins owned by the button task
pub struct ButtonInputs {
    /// Button A (pull-up, active-low)
    pub button_a: Input<'static>,
    /// Joystick push button (pull-up, active-low)
    pub joystick: Input<'static>,
    /// Green status LED
    pub green: GpioLed<Output<'static>>,
}

/// Button task - runs forever
#[embassy_executor::task]
pub async fn button_task(mut inputs: ButtonInputs, window_us: u64) {
    info!("Button task started");

    let mut debouncer = Debouncer::new(window_us);

    loop {
        select(
            inputs.button_a.wait_for_falling_edge(),
            inputs.joystick.wait_for_falling_edge(),
        )
        .await;

        let now_us = Instant::now().as_micros();
        let levels = ButtonLevels::from_pins(inputs.button_a.is_high(), inputs.joystick.is_high());

        match debouncer.on_edge(levels, now_us) {
            Some(action) => {
                let flags = FLAGS.load().apply(action);
                FLAGS.store(flags);
                inputs.green.set_on(flags.green_led_on);
                debug!("Button: {:?} -> {:?}", action, flags);
            }
            None => {
                trace!("Button edge dropped at {}us", now_us);
            }
        }
    }
}
