//! Frame composition
//!
//! Builds one complete frame per cycle from the joystick sample and the
//! toggle flags: background, border, optional nested outlines, and an
//! 8x8 cursor block that tracks the stick. Every frame is drawn from
//! scratch, so the same inputs always produce the same pixels.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};

use crate::config::{DisplayLayout, FrameRect};
use crate::mapper::JoystickSample;
use crate::state::ToggleFlags;

/// Cursor coordinates before offset and Y inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorPosition {
    pub pos_x: u16,
    pub pos_y: u16,
}

impl CursorPosition {
    /// Top-left corner of the cursor block on screen
    pub fn block_origin(self, layout: &DisplayLayout) -> Point {
        Point::new(
            i32::from(self.pos_x) + layout.cursor_offset,
            layout.cursor_flip_y - i32::from(self.pos_y) + layout.cursor_offset,
        )
    }
}

/// Scale a raw sample down to cursor coordinates (ceiling division)
pub fn cursor_position(sample: JoystickSample, layout: &DisplayLayout) -> CursorPosition {
    CursorPosition {
        pos_x: sample.x.div_ceil(layout.cursor_divisor_x),
        pos_y: sample.y.div_ceil(layout.cursor_divisor_y),
    }
}

fn outline(rect: FrameRect) -> Rectangle {
    Rectangle::with_corners(
        Point::new(rect.left, rect.top),
        Point::new(rect.right, rect.bottom),
    )
}

/// Draws the screen contents for one cycle
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    layout: DisplayLayout,
}

impl Compositor {
    pub const fn new(layout: DisplayLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DisplayLayout {
        &self.layout
    }

    fn foreground(&self) -> BinaryColor {
        BinaryColor::from(self.layout.foreground_on)
    }

    /// Compose a full frame into `target`
    ///
    /// Pixels falling outside the target are clipped by the target itself.
    pub fn compose<D>(
        &self,
        target: &mut D,
        sample: JoystickSample,
        flags: ToggleFlags,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let fg = self.foreground();
        target.clear(fg.invert())?;

        let stroke = PrimitiveStyleBuilder::new()
            .stroke_color(fg)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        outline(self.layout.border)
            .into_styled(stroke)
            .draw(target)?;

        if flags.draw_extra_frame {
            for inset in 1..=i32::from(self.layout.extra_frames) {
                outline(self.layout.border.inset(inset))
                    .into_styled(stroke)
                    .draw(target)?;
            }
        }

        let origin = cursor_position(sample, &self.layout).block_origin(&self.layout);
        let size = Size::new_equal(self.layout.cursor_size);
        Rectangle::new(origin, size)
            .into_styled(PrimitiveStyle::with_fill(fg))
            .draw(target)?;

        Ok(())
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(DisplayLayout::DEFAULT)
    }
}
