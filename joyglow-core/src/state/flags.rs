//! Toggle flags shared between the button handler and the control loop

use portable_atomic::{AtomicU8, Ordering};

const LEDS_ENABLED: u8 = 1 << 0;
const DRAW_EXTRA_FRAME: u8 = 1 << 1;
const GREEN_LED_ON: u8 = 1 << 2;

/// User-visible modes toggled by the buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToggleFlags {
    /// Red/blue LEDs follow the joystick (otherwise forced dark)
    pub leds_enabled: bool,
    /// Draw the nested decoration inside the border
    pub draw_extra_frame: bool,
    /// Green status LED state
    pub green_led_on: bool,
}

impl ToggleFlags {
    /// State at power-on
    pub const INITIAL: Self = Self {
        leds_enabled: true,
        draw_extra_frame: false,
        green_led_on: false,
    };

    /// Pack into a single byte
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.leds_enabled {
            bits |= LEDS_ENABLED;
        }
        if self.draw_extra_frame {
            bits |= DRAW_EXTRA_FRAME;
        }
        if self.green_led_on {
            bits |= GREEN_LED_ON;
        }
        bits
    }

    /// Unpack from a byte produced by [`ToggleFlags::bits`]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            leds_enabled: bits & LEDS_ENABLED != 0,
            draw_extra_frame: bits & DRAW_EXTRA_FRAME != 0,
            green_led_on: bits & GREEN_LED_ON != 0,
        }
    }
}

impl Default for ToggleFlags {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Interrupt-safe holder for [`ToggleFlags`]
///
/// All three flags live in one atomic byte, so a reader never sees the
/// frame toggle without the matching green LED toggle. The button task is
/// the only writer; the control loop only calls [`SharedFlags::load`].
pub struct SharedFlags {
    bits: AtomicU8,
}

impl SharedFlags {
    pub const fn new(initial: ToggleFlags) -> Self {
        Self {
            bits: AtomicU8::new(initial.bits()),
        }
    }

    /// Read the current flags
    pub fn load(&self) -> ToggleFlags {
        ToggleFlags::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Publish new flags (button handler only)
    pub fn store(&self, flags: ToggleFlags) {
        self.bits.store(flags.bits(), Ordering::Release);
    }
}

impl Default for SharedFlags {
    fn default() -> Self {
        Self::new(ToggleFlags::INITIAL)
    }
}
