//! Control configuration types
//!
//! Joystick calibration, debounce timing, display layout and loop cadence,
//! plus [`ControlConfig`] which bundles everything.

use super::hardware::{DisplayConfig, PinMap, PwmConfig};

/// Joystick calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickConfig {
    /// Raw ADC value at rest
    pub center: u16,
    /// Deviations at or below this are treated as zero
    pub dead_zone: u16,
}

impl JoystickConfig {
    pub const DEFAULT: Self = Self {
        center: 2048,
        dead_zone: 100,
    };
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Button debounce timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Minimum time between accepted presses, in microseconds (exclusive)
    pub window_us: u64,
}

impl DebounceConfig {
    pub const DEFAULT: Self = Self { window_us: 300_000 };
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outline rectangle given by its inclusive corner pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FrameRect {
    /// Shrink the rectangle by `by` pixels on every side
    pub const fn inset(self, by: i32) -> Self {
        Self {
            left: self.left + by,
            top: self.top + by,
            right: self.right - by,
            bottom: self.bottom - by,
        }
    }

    /// Width in pixels, both edges included
    pub const fn width(self) -> i32 {
        self.right - self.left + 1
    }

    /// Height in pixels, both edges included
    pub const fn height(self) -> i32 {
        self.bottom - self.top + 1
    }
}

/// Screen layout for the compositor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayLayout {
    /// Outer border
    pub border: FrameRect,
    /// Number of nested outlines drawn inside the border when enabled
    pub extra_frames: u8,
    /// Raw X units per cursor pixel (ceiling division)
    pub cursor_divisor_x: u16,
    /// Raw Y units per cursor pixel (ceiling division)
    pub cursor_divisor_y: u16,
    /// Offset added to both cursor coordinates
    pub cursor_offset: i32,
    /// Y coordinate the cursor Y is subtracted from (display Y grows down)
    pub cursor_flip_y: i32,
    /// Side length of the cursor block
    pub cursor_size: u32,
    /// Stroke color; the background is its complement
    pub foreground_on: bool,
}

impl DisplayLayout {
    pub const DEFAULT: Self = Self {
        // 122x58 outline
        border: FrameRect {
            left: 3,
            top: 3,
            right: 124,
            bottom: 60,
        },
        extra_frames: 2,
        cursor_divisor_x: 38,
        cursor_divisor_y: 88,
        cursor_offset: 5,
        cursor_flip_y: 48,
        cursor_size: 8,
        foreground_on: true,
    };
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Control loop cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopConfig {
    /// Sleep between cycles in milliseconds (processing time comes on top)
    pub period_ms: u64,
}

impl LoopConfig {
    pub const DEFAULT: Self = Self { period_ms: 10 };
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete firmware configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    pub pins: PinMap,
    pub joystick: JoystickConfig,
    pub pwm: PwmConfig,
    pub debounce: DebounceConfig,
    pub display: DisplayConfig,
    pub layout: DisplayLayout,
    pub control_loop: LoopConfig,
}

impl ControlConfig {
    pub const DEFAULT: Self = Self {
        pins: PinMap::DEFAULT,
        joystick: JoystickConfig::DEFAULT,
        pwm: PwmConfig::DEFAULT,
        debounce: DebounceConfig::DEFAULT,
        display: DisplayConfig::DEFAULT,
        layout: DisplayLayout::DEFAULT,
        control_loop: LoopConfig::DEFAULT,
    };
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = ControlConfig::default();

        assert_eq!(config.joystick.center, 2048);
        assert_eq!(config.joystick.dead_zone, 100);
        assert_eq!(config.pwm.wrap, 2048);
        assert_eq!(config.debounce.window_us, 300_000);
        assert_eq!(config.display.address, 0x3C);
        assert_eq!(config.display.i2c_frequency_hz, 400_000);
        assert_eq!(config.control_loop.period_ms, 10);
    }

    #[test]
    fn test_frame_inset() {
        let border = DisplayLayout::DEFAULT.border;

        assert_eq!(
            border.inset(1),
            FrameRect {
                left: 4,
                top: 4,
                right: 123,
                bottom: 59
            }
        );
        assert_eq!(
            border.inset(2),
            FrameRect {
                left: 5,
                top: 5,
                right: 122,
                bottom: 58
            }
        );
    }

    #[test]
    fn test_frame_size() {
        let border = DisplayLayout::DEFAULT.border;

        assert_eq!((border.width(), border.height()), (122, 58));
        assert_eq!((border.inset(1).width(), border.inset(1).height()), (120, 56));
        assert_eq!((border.inset(2).width(), border.inset(2).height()), (118, 54));
    }
}
