//! Embassy async tasks
//!
//! The control task and the button task share state only through the
//! toggle flags in [`crate::channels`].

pub mod buttons;
pub mod control;

pub use buttons::{button_task, ButtonInputs};
pub use control::{control_task, Control};
