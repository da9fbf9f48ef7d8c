//! Display rendering
//!
//! The frame buffer mirrors the panel memory; the compositor redraws it
//! from scratch every control cycle.

pub mod compositor;
pub mod frame;

pub use compositor::{cursor_position, Compositor, CursorPosition};
pub use frame::{FrameBuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
