//! Monochrome frame buffer
//!
//! 128x64 pixels stored in the controller's native page layout: byte
//! `page * WIDTH + x` holds column `x` of rows `page*8 .. page*8+7`, with
//! row `y` in bit `y % 8`. The buffer can be streamed to the panel as-is.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;
/// Buffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Off-screen image of the display
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    buf: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    /// Create an all-off frame
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_SIZE],
        }
    }

    fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(((y / 8) * WIDTH + x, 1 << (y % 8)))
    }

    /// Set one pixel; coordinates outside the panel are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((idx, mask)) = Self::index(x, y) {
            if on {
                self.buf[idx] |= mask;
            } else {
                self.buf[idx] &= !mask;
            }
        }
    }

    /// Read one pixel; coordinates outside the panel read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|(idx, mask)| self.buf[idx] & mask != 0)
    }

    /// Set every pixel to the same state
    pub fn fill(&mut self, on: bool) {
        self.buf.fill(if on { 0xFF } else { 0x00 });
    }

    /// Raw page-ordered bytes
    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.buf
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.buf.iter().map(|b| b.count_ones()).sum()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}
