//! Control loop
//!
//! One cycle reads the joystick, drives the PWM LEDs from the dead-zone
//! mapping, then redraws and flushes the display. The caller owns the
//! cadence (sleeping between cycles) and the shared flags.

use crate::config::{ControlConfig, JoystickConfig};
use crate::display::{Compositor, FrameBuffer};
use crate::mapper::{led_levels, JoystickSample, LedLevels};
use crate::state::ToggleFlags;
use crate::traits::{AnalogSampler, FrameSink, LedOutput};

/// Errors that can abort or degrade a control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError<S, D> {
    /// ADC read failed; no outputs were touched
    Sampler(S),
    /// Display transfer failed; LEDs were already updated
    Display(D),
}

/// What a successful cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub sample: JoystickSample,
    pub levels: LedLevels,
}

/// Orchestrates sampler, LED pair and display
pub struct ControlLoop<S, L, D> {
    sampler: S,
    leds: L,
    display: D,
    joystick: JoystickConfig,
    wrap: u16,
    compositor: Compositor,
    frame: FrameBuffer,
}

impl<S, L, D> ControlLoop<S, L, D>
where
    S: AnalogSampler,
    L: LedOutput,
    D: FrameSink,
{
    pub fn new(sampler: S, leds: L, display: D, config: &ControlConfig) -> Self {
        Self {
            sampler,
            leds,
            display,
            joystick: config.joystick,
            wrap: config.pwm.wrap,
            compositor: Compositor::new(config.layout),
            frame: FrameBuffer::new(),
        }
    }

    /// Flush an empty frame
    ///
    /// Used once at startup so the panel does not show stale RAM contents
    /// before the first cycle.
    pub async fn blank(&mut self) -> Result<(), D::Error> {
        self.frame.fill(!self.compositor.layout().foreground_on);
        self.display.flush(&self.frame).await
    }

    /// Run one control cycle with the given flags
    ///
    /// Sampling and LED updates complete synchronously; the cycle yields
    /// only while the frame is on the bus.
    pub async fn run_cycle(
        &mut self,
        flags: ToggleFlags,
    ) -> Result<CycleReport, CycleError<S::Error, D::Error>> {
        let sample = self.sampler.sample().map_err(CycleError::Sampler)?;

        let levels = led_levels(sample, &self.joystick, self.wrap, flags.leds_enabled);
        self.leds.set_levels(levels);

        if let Err(never) = self.compositor.compose(&mut self.frame, sample, flags) {
            match never {}
        }
        self.display
            .flush(&self.frame)
            .await
            .map_err(CycleError::Display)?;

        Ok(CycleReport { sample, levels })
    }

    /// Last composed frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn leds_mut(&mut self) -> &mut L {
        &mut self.leds
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Axis;
    use core::cell::Cell;
    use embassy_futures::{block_on, join::join, yield_now};

    /// Mock ADC returning scripted readings
    struct MockSampler {
        x: u16,
        y: u16,
        fail: bool,
        reads: Vec<Axis>,
    }

    impl MockSampler {
        fn new(x: u16, y: u16) -> Self {
            Self {
                x,
                y,
                fail: false,
                reads: Vec::new(),
            }
        }
    }

    impl AnalogSampler for MockSampler {
        type Error = ();

        fn read_axis(&mut self, axis: Axis) -> Result<u16, ()> {
            if self.fail {
                return Err(());
            }
            self.reads.push(axis);
            Ok(match axis {
                Axis::X => self.x,
                Axis::Y => self.y,
            })
        }
    }

    /// Mock LED pair recording the last levels
    #[derive(Default)]
    struct MockLeds {
        last: Option<LedLevels>,
    }

    impl LedOutput for MockLeds {
        fn set_levels(&mut self, levels: LedLevels) {
            self.last = Some(levels);
        }
    }

    /// Mock display counting flushes
    #[derive(Default)]
    struct MockDisplay {
        flushes: usize,
        last: Option<FrameBuffer>,
        fail: bool,
    }

    impl FrameSink for MockDisplay {
        type Error = &'static str;

        async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
            if self.fail {
                return Err("nack");
            }
            self.flushes += 1;
            self.last = Some(frame.clone());
            Ok(())
        }
    }

    /// Display whose transfer takes several polls, like a DMA/IRQ-driven bus
    struct SlowDisplay<'a> {
        other_ran: &'a Cell<bool>,
        saw_other: bool,
    }

    impl FrameSink for SlowDisplay<'_> {
        type Error = ();

        async fn flush(&mut self, _frame: &FrameBuffer) -> Result<(), ()> {
            for _ in 0..4 {
                yield_now().await;
            }
            self.saw_other = self.other_ran.get();
            Ok(())
        }
    }

    fn control(x: u16, y: u16) -> ControlLoop<MockSampler, MockLeds, MockDisplay> {
        ControlLoop::new(
            MockSampler::new(x, y),
            MockLeds::default(),
            MockDisplay::default(),
            &ControlConfig::DEFAULT,
        )
    }

    #[test]
    fn test_cycle_drives_leds_and_display() {
        let mut control = control(0, 3000);

        let report = block_on(control.run_cycle(ToggleFlags::INITIAL)).unwrap();

        assert_eq!(report.sample, JoystickSample::new(0, 3000));
        assert_eq!(report.levels, LedLevels { red: 2048, blue: 952 });
        assert_eq!(control.leds_mut().last, Some(report.levels));
        assert_eq!(control.display_mut().flushes, 1);
    }

    #[test]
    fn test_samples_x_before_y() {
        let mut control = control(2048, 2048);

        block_on(control.run_cycle(ToggleFlags::INITIAL)).unwrap();

        assert_eq!(control.sampler_mut().reads, [Axis::X, Axis::Y]);
    }

    #[test]
    fn test_leds_disabled_gives_zero_levels() {
        let mut control = control(0, 4095);
        let flags = ToggleFlags {
            leds_enabled: false,
            ..ToggleFlags::INITIAL
        };

        let report = block_on(control.run_cycle(flags)).unwrap();

        assert_eq!(report.levels, LedLevels::OFF);
        assert_eq!(control.leds_mut().last, Some(LedLevels::OFF));
        // Display still tracks the stick
        assert!(control.frame().pixel(5, 6));
    }

    #[test]
    fn test_sampler_error_touches_nothing() {
        let mut control = control(0, 0);
        control.sampler_mut().fail = true;

        let result = block_on(control.run_cycle(ToggleFlags::INITIAL));

        assert_eq!(result, Err(CycleError::Sampler(())));
        assert_eq!(control.leds_mut().last, None);
        assert_eq!(control.display_mut().flushes, 0);
    }

    #[test]
    fn test_display_error_after_leds_updated() {
        let mut control = control(0, 2048);
        control.display_mut().fail = true;

        let result = block_on(control.run_cycle(ToggleFlags::INITIAL));

        assert_eq!(result, Err(CycleError::Display("nack")));
        assert_eq!(
            control.leds_mut().last,
            Some(LedLevels { red: 2048, blue: 0 })
        );
    }

    #[test]
    fn test_blank_flushes_empty_frame() {
        let mut control = control(0, 0);

        block_on(control.blank()).unwrap();

        let display = control.display_mut();
        assert_eq!(display.flushes, 1);
        assert_eq!(display.last.as_ref().map(FrameBuffer::lit_count), Some(0));
    }

    #[test]
    fn test_flushed_frame_matches_composition() {
        let mut control = control(1000, 1000);
        let flags = ToggleFlags {
            draw_extra_frame: true,
            ..ToggleFlags::INITIAL
        };

        block_on(control.run_cycle(flags)).unwrap();

        let mut expected = FrameBuffer::new();
        Compositor::default()
            .compose(&mut expected, JoystickSample::new(1000, 1000), flags)
            .ok();
        let flushed = control.display_mut().last.clone().unwrap();
        assert!(flushed == expected);
    }

    #[test]
    fn test_other_tasks_run_during_flush() {
        let other_ran = Cell::new(false);
        let mut control = ControlLoop::new(
            MockSampler::new(2048, 2048),
            MockLeds::default(),
            SlowDisplay {
                other_ran: &other_ran,
                saw_other: false,
            },
            &ControlConfig::DEFAULT,
        );

        let (result, ()) = block_on(join(control.run_cycle(ToggleFlags::INITIAL), async {
            other_ran.set(true);
        }));

        assert!(result.is_ok());
        // A button press handled mid-transfer is not held off until the frame is out
        assert!(control.display_mut().saw_other);
    }
}
