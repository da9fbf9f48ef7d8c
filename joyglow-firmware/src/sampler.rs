//! Joystick ADC adapter
//!
//! RP2040 channel mapping used here:
//! - ADC0 (GPIO26): Y axis
//! - ADC1 (GPIO27): X axis

use embassy_rp::adc::{self, Adc, Blocking, Channel};
use joyglow_core::traits::{AnalogSampler, Axis};

/// Both joystick potentiometers on the blocking ADC
pub struct JoystickAdc {
    adc: Adc<'static, Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl JoystickAdc {
    pub fn new(adc: Adc<'static, Blocking>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }
}

impl AnalogSampler for JoystickAdc {
    type Error = adc::Error;

    fn read_axis(&mut self, axis: Axis) -> Result<u16, Self::Error> {
        let channel = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        self.adc.blocking_read(channel)
    }
}
