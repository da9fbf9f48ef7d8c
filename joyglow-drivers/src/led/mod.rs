//! LED output implementations

pub mod gpio;
pub mod pwm;

pub use gpio::GpioLed;
pub use pwm::PwmLedPair;
