//! Control task
//!
//! Samples the joystick, drives the PWM LEDs and redraws the display,
//! then sleeps for the loop period. Processing time comes on top of the
//! sleep, so the cycle is not rate-locked. The frame transfer is
//! interrupt-driven, so the button task runs while it is in flight.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::PwmOutput;
use embassy_time::Timer;

use joyglow_core::{ControlLoop, CycleError};
use joyglow_drivers::display::Ssd1306;
use joyglow_drivers::led::PwmLedPair;

use crate::channels::FLAGS;
use crate::sampler::JoystickAdc;

/// Display on the async I2C1 bus
pub type Display = Ssd1306<I2c<'static, I2C1, Async>>;

/// Control loop wired to the board peripherals
pub type Control =
    ControlLoop<JoystickAdc, PwmLedPair<PwmOutput<'static>, PwmOutput<'static>>, Display>;

/// Control task - runs forever
#[embassy_executor::task]
pub async fn control_task(mut control: Control, period_ms: u64) {
    info!("Control task started ({}ms period)", period_ms);

    if let Err(e) = control.blank().await {
        warn!("Initial display clear failed: {:?}", e);
    }

    loop {
        let flags = FLAGS.load();

        match control.run_cycle(flags).await {
            Ok(report) => {
                trace!(
                    "x={} y={} red={} blue={}",
                    report.sample.x,
                    report.sample.y,
                    report.levels.red,
                    report.levels.blue
                );
            }
            Err(CycleError::Sampler(e)) => {
                warn!("ADC read failed, cycle skipped: {:?}", e);
            }
            Err(CycleError::Display(e)) => {
                warn!("Display flush failed: {:?}", e);
            }
        }

        Timer::after_millis(period_ms).await;
    }
}
