//! Button debounce state machine
//!
//! Both buttons share one timer. A falling edge is accepted only if it
//! arrives strictly more than the debounce window after the last accepted
//! edge; anything earlier is dropped without being queued.
//!
//! After the guard passes, the current pin levels decide what happens, not
//! which pin raised the edge. Button A wins when both read pressed.
//!
//! ```text
//! Idle ──edge, guard ok, a pressed──▶ toggle LEDs       ──▶ Cooldown
//! Idle ──edge, guard ok, joy pressed─▶ toggle frame+green ─▶ Cooldown
//! Cooldown ──edge within window──▶ (dropped)
//! Cooldown ──window elapsed──▶ Idle
//! ```

use super::flags::ToggleFlags;

/// Logical button states sampled inside the edge handler (true = pressed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub button_a: bool,
    pub joystick: bool,
}

impl ButtonLevels {
    /// Build from raw pin levels of the active-low buttons
    pub const fn from_pins(button_a_high: bool, joystick_high: bool) -> Self {
        Self {
            button_a: !button_a_high,
            joystick: !joystick_high,
        }
    }
}

/// Result of an accepted button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Button A: enable/disable the PWM LEDs
    ToggleLeds,
    /// Joystick button: extra frame and green LED, together
    ToggleExtraFrame,
}

impl ButtonAction {
    /// Pick the action for the sensed levels, Button A first
    pub const fn resolve(levels: ButtonLevels) -> Option<Self> {
        if levels.button_a {
            Some(ButtonAction::ToggleLeds)
        } else if levels.joystick {
            Some(ButtonAction::ToggleExtraFrame)
        } else {
            None
        }
    }
}

impl ToggleFlags {
    /// Apply a button action
    pub const fn apply(self, action: ButtonAction) -> Self {
        match action {
            ButtonAction::ToggleLeds => Self {
                leds_enabled: !self.leds_enabled,
                ..self
            },
            ButtonAction::ToggleExtraFrame => Self {
                draw_extra_frame: !self.draw_extra_frame,
                green_led_on: !self.green_led_on,
                ..self
            },
        }
    }
}

/// True if an edge at `now_us` is outside the window after `last_accepted_us`
const fn window_elapsed(now_us: u64, last_accepted_us: u64, window_us: u64) -> bool {
    now_us.saturating_sub(last_accepted_us) > window_us
}

/// Pure debounce step
///
/// Returns the new flags and the new last-accepted timestamp. Rejected or
/// idle edges return the inputs unchanged.
pub const fn debounce(
    flags: ToggleFlags,
    levels: ButtonLevels,
    now_us: u64,
    last_accepted_us: u64,
    window_us: u64,
) -> (ToggleFlags, u64) {
    if !window_elapsed(now_us, last_accepted_us, window_us) {
        return (flags, last_accepted_us);
    }

    match ButtonAction::resolve(levels) {
        Some(action) => (flags.apply(action), now_us),
        None => (flags, last_accepted_us),
    }
}

/// Debounce state owned by the button handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_us: u64,
    last_accepted_us: u64,
}

impl Debouncer {
    /// Create a debouncer; the timer starts at 0 (boot)
    pub const fn new(window_us: u64) -> Self {
        Self {
            window_us,
            last_accepted_us: 0,
        }
    }

    /// Timestamp of the last accepted event
    pub const fn last_accepted_us(&self) -> u64 {
        self.last_accepted_us
    }

    /// Whether an edge at `now_us` would pass the guard
    pub const fn is_cooling_down(&self, now_us: u64) -> bool {
        !window_elapsed(now_us, self.last_accepted_us, self.window_us)
    }

    /// Handle a falling edge
    ///
    /// Returns the action to apply, or `None` if the edge was debounced or
    /// neither button reads pressed.
    pub fn on_edge(&mut self, levels: ButtonLevels, now_us: u64) -> Option<ButtonAction> {
        if self.is_cooling_down(now_us) {
            return None;
        }

        let action = ButtonAction::resolve(levels)?;
        self.last_accepted_us = now_us;
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOW: u64 = 300_000;

    const A: ButtonLevels = ButtonLevels {
        button_a: true,
        joystick: false,
    };
    const JOY: ButtonLevels = ButtonLevels {
        button_a: false,
        joystick: true,
    };
    const BOTH: ButtonLevels = ButtonLevels {
        button_a: true,
        joystick: true,
    };

    #[test]
    fn test_from_pins_active_low() {
        assert_eq!(ButtonLevels::from_pins(false, true), A);
        assert_eq!(ButtonLevels::from_pins(true, false), JOY);
        assert_eq!(ButtonLevels::from_pins(true, true), ButtonLevels::default());
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut debouncer = Debouncer::new(WINDOW);

        // Timer starts at boot, so an edge at t=0 is inside the window
        assert_eq!(debouncer.on_edge(A, 0), None);
        assert_eq!(debouncer.on_edge(A, 300_000), None);
        assert_eq!(debouncer.on_edge(A, 300_001), Some(ButtonAction::ToggleLeds));
        assert_eq!(debouncer.last_accepted_us(), 300_001);
    }

    #[test]
    fn test_window_measured_from_accepted_event() {
        let mut debouncer = Debouncer::new(WINDOW);

        assert!(debouncer.on_edge(A, 1_000_000).is_some());
        assert_eq!(debouncer.on_edge(A, 1_300_000), None);
        // Rejected edge must not extend the window
        assert!(debouncer.on_edge(JOY, 1_300_001).is_some());
    }

    #[test]
    fn test_timer_shared_between_buttons() {
        let mut debouncer = Debouncer::new(WINDOW);

        assert_eq!(debouncer.on_edge(A, 500_000), Some(ButtonAction::ToggleLeds));
        assert_eq!(debouncer.on_edge(JOY, 600_000), None);
    }

    #[test]
    fn test_button_a_priority() {
        let flags = ToggleFlags::INITIAL;
        let (next, last) = debounce(flags, BOTH, 1_000_000, 0, WINDOW);

        assert!(!next.leds_enabled);
        assert_eq!(next.draw_extra_frame, flags.draw_extra_frame);
        assert_eq!(next.green_led_on, flags.green_led_on);
        assert_eq!(last, 1_000_000);
    }

    #[test]
    fn test_joystick_toggles_frame_and_green_together() {
        let flags = ToggleFlags::INITIAL;

        let (next, _) = debounce(flags, JOY, 1_000_000, 0, WINDOW);
        assert!(next.leds_enabled);
        assert!(next.draw_extra_frame);
        assert!(next.green_led_on);

        let (back, _) = debounce(next, JOY, 2_000_000, 1_000_000, WINDOW);
        assert_eq!(back, flags);
    }

    #[test]
    fn test_no_pin_pressed_keeps_timer() {
        let mut debouncer = Debouncer::new(WINDOW);

        assert_eq!(debouncer.on_edge(ButtonLevels::default(), 1_000_000), None);
        assert_eq!(debouncer.last_accepted_us(), 0);

        let (flags, last) = debounce(
            ToggleFlags::INITIAL,
            ButtonLevels::default(),
            1_000_000,
            0,
            WINDOW,
        );
        assert_eq!(flags, ToggleFlags::INITIAL);
        assert_eq!(last, 0);
    }

    proptest! {
        #[test]
        fn prop_accepts_iff_window_elapsed(
            mut times in proptest::collection::vec(0u64..5_000_000, 1..32)
        ) {
            times.sort_unstable();
            let mut debouncer = Debouncer::new(WINDOW);
            let mut last = 0u64;

            for now in times {
                let accepted = debouncer.on_edge(A, now).is_some();
                prop_assert_eq!(accepted, now - last > WINDOW);
                if accepted {
                    last = now;
                }
            }
        }

        #[test]
        fn prop_pure_step_matches_debouncer(
            now in 0u64..2_000_000,
            a in any::<bool>(),
            joy in any::<bool>(),
        ) {
            let levels = ButtonLevels { button_a: a, joystick: joy };
            let mut debouncer = Debouncer::new(WINDOW);
            let action = debouncer.on_edge(levels, now);

            let (flags, last) = debounce(ToggleFlags::INITIAL, levels, now, 0, WINDOW);
            let expected = match action {
                Some(action) => ToggleFlags::INITIAL.apply(action),
                None => ToggleFlags::INITIAL,
            };
            prop_assert_eq!(flags, expected);
            prop_assert_eq!(last, debouncer.last_accepted_us());
        }
    }
}
