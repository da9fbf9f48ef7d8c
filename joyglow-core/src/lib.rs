//! Board-agnostic core logic for the joyglow firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (analog sampler, LEDs, display sink)
//! - Dead-zone mapping from joystick samples to PWM levels
//! - Button debounce state machine and shared toggle flags
//! - Frame buffer and display compositor
//! - The per-cycle control loop
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod display;
pub mod mapper;
pub mod state;
pub mod traits;

pub use control::{ControlLoop, CycleError, CycleReport};
pub use mapper::{JoystickSample, LedLevels};
pub use state::{ButtonAction, ButtonLevels, Debouncer, SharedFlags, ToggleFlags};
