//! Joystick analog sampling

use crate::mapper::JoystickSample;

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Trait for reading the two joystick potentiometers
///
/// Implementations return raw 12-bit conversions (0..=4095).
pub trait AnalogSampler {
    type Error;

    /// Convert a single axis
    fn read_axis(&mut self, axis: Axis) -> Result<u16, Self::Error>;

    /// Read both axes, X first then Y
    fn sample(&mut self) -> Result<JoystickSample, Self::Error> {
        let x = self.read_axis(Axis::X)?;
        let y = self.read_axis(Axis::Y)?;
        Ok(JoystickSample { x, y })
    }
}
