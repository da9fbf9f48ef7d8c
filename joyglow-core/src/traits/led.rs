//! LED output traits

use crate::mapper::LedLevels;

/// Trait for the PWM-dimmed red/blue LED pair
pub trait LedOutput {
    /// Apply compare levels to both channels
    ///
    /// Levels are in PWM counts against the configured wrap value.
    fn set_levels(&mut self, levels: LedLevels);
}

/// Trait for a plain on/off indicator LED
pub trait StatusLed {
    /// Turn the LED on or off
    fn set_on(&mut self, on: bool);
}
