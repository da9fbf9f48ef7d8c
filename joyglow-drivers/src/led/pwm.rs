//! PWM-dimmed LED pair
//!
//! Red follows the X axis and blue the Y axis. Levels are written as raw
//! compare values, clamped to the channel's maximum duty.

use embedded_hal::pwm::SetDutyCycle;
use joyglow_core::traits::LedOutput;
use joyglow_core::LedLevels;

/// Red/blue LEDs on two PWM channels
pub struct PwmLedPair<R, B> {
    red: R,
    blue: B,
}

impl<R, B> PwmLedPair<R, B>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create the pair with both channels dark
    pub fn new(red: R, blue: B) -> Self {
        let mut pair = Self { red, blue };
        pair.set_levels(LedLevels::OFF);
        pair
    }

    /// Release both channels
    pub fn release(self) -> (R, B) {
        (self.red, self.blue)
    }
}

fn apply<P: SetDutyCycle>(channel: &mut P, level: u16) {
    let duty = level.min(channel.max_duty_cycle());
    // Rejected duty updates leave the previous level in place
    channel.set_duty_cycle(duty).ok();
}

impl<R, B> LedOutput for PwmLedPair<R, B>
where
    R: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_levels(&mut self, levels: LedLevels) {
        apply(&mut self.red, levels.red);
        apply(&mut self.blue, levels.blue);
    }
}
