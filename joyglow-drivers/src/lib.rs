//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in joyglow-core on top of `embedded-hal` 1.0:
//!
//! - SSD1306 OLED display over I2C
//! - Red/blue LED pair on PWM channels
//! - GPIO status LED

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod led;
