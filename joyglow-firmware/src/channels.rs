//! Inter-task shared state
//!
//! The button task is the only writer of [`FLAGS`]; the control task reads
//! a snapshot at the start of every cycle.

use joyglow_core::{SharedFlags, ToggleFlags};

/// Toggle flags published by the button task
pub static FLAGS: SharedFlags = SharedFlags::new(ToggleFlags::INITIAL);
