//! Hardware configuration types
//!
//! Pin assignments, PWM slice parameters and the display bus.

/// GPIO pin assignment
///
/// All buttons are wired with internal pull-ups and read active-low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// I2C1 data line
    pub i2c_sda: u8,
    /// I2C1 clock line
    pub i2c_scl: u8,
    /// Green LED (plain digital output)
    pub led_green: u8,
    /// Blue LED (PWM, driven by the Y axis)
    pub led_blue: u8,
    /// Red LED (PWM, driven by the X axis)
    pub led_red: u8,
    /// Button A
    pub button_a: u8,
    /// Joystick push button
    pub button_joystick: u8,
    /// Joystick X axis (ADC1)
    pub axis_x: u8,
    /// Joystick Y axis (ADC0)
    pub axis_y: u8,
}

impl PinMap {
    pub const DEFAULT: Self = Self {
        i2c_sda: 14,
        i2c_scl: 15,
        led_green: 11,
        led_blue: 12,
        led_red: 13,
        button_a: 5,
        button_joystick: 22,
        axis_x: 27,
        axis_y: 26,
    };
}

impl Default for PinMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// PWM slice configuration shared by the red and blue LEDs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// System clock divider
    pub clock_divider: f32,
    /// Counter wrap value (period in ticks)
    pub wrap: u16,
}

impl PwmConfig {
    pub const DEFAULT: Self = Self {
        clock_divider: 6.1,
        wrap: 2048,
    };
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Display bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the display controller
    pub address: u8,
    /// I2C clock in Hz
    pub i2c_frequency_hz: u32,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        address: 0x3C,
        i2c_frequency_hz: 400_000,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
