//! Configuration types
//!
//! All parameters are compile-time constants gathered into
//! [`ControlConfig::DEFAULT`]. Logic takes these structures by reference so
//! it can be exercised against other parameter sets in tests.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
