//! Green indicator LED on a plain GPIO output

use embedded_hal::digital::OutputPin;
use joyglow_core::traits::StatusLed;

/// Active-high indicator LED, lit while the pin is driven high
pub struct GpioLed<P> {
    pin: P,
}

impl<P: OutputPin> GpioLed<P> {
    /// Take ownership of the pin and drive it low
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin };
        led.set_on(false);
        led
    }
}

impl<P: OutputPin> StatusLed for GpioLed<P> {
    fn set_on(&mut self, on: bool) {
        // GPIO writes on the target are infallible
        self.pin.set_state(on.into()).ok();
    }
}
