//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop and the
//! board-specific implementations in joyglow-drivers and the firmware.

pub mod display;
pub mod led;
pub mod sampler;

pub use display::FrameSink;
pub use led::{LedOutput, StatusLed};
pub use sampler::{AnalogSampler, Axis};
