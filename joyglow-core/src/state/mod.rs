//! Button state
//!
//! The debounce state machine turns raw falling edges on the two buttons
//! into toggle actions. The resulting flags are published through
//! [`SharedFlags`] so the control loop always observes a consistent set.

pub mod debounce;
pub mod flags;

pub use debounce::{debounce, ButtonAction, ButtonLevels, Debouncer};
pub use flags::{SharedFlags, ToggleFlags};
