//! Dead-zone mapping
//!
//! Converts raw joystick samples into PWM levels. The X axis drives the red
//! LED and the Y axis the blue LED; brightness grows with deflection from
//! the rest position in either direction.

use crate::config::JoystickConfig;

/// One raw reading of both joystick axes (12-bit ADC counts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
}

impl JoystickSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// PWM compare levels for one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedLevels {
    /// Red channel (X axis)
    pub red: u16,
    /// Blue channel (Y axis)
    pub blue: u16,
}

impl LedLevels {
    /// Both channels dark
    pub const OFF: Self = Self { red: 0, blue: 0 };
}

/// Distance of a sample from the rest position
pub const fn deviation(sample: u16, center: u16) -> u16 {
    sample.abs_diff(center)
}

/// Suppress deviations inside the dead zone
///
/// Returns 0 when `deviation <= threshold`, otherwise the deviation itself.
pub const fn pwm_level(deviation: u16, threshold: u16) -> u16 {
    if deviation <= threshold {
        0
    } else {
        deviation
    }
}

/// Compute both LED levels for a sample
///
/// When `leds_enabled` is false both channels are forced to zero regardless
/// of deflection. Levels never exceed the PWM `wrap` value.
pub fn led_levels(
    sample: JoystickSample,
    config: &JoystickConfig,
    wrap: u16,
    leds_enabled: bool,
) -> LedLevels {
    if !leds_enabled {
        return LedLevels::OFF;
    }

    let axis_level = |raw: u16| {
        pwm_level(deviation(raw, config.center), config.dead_zone).min(wrap)
    };

    LedLevels {
        red: axis_level(sample.x),
        blue: axis_level(sample.y),
    }
}
