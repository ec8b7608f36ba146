//! Serial character dispatcher for a Blue Pill with an SSD1306 OLED, a 5x5
//! WS2812 matrix and two push-button driven indicator LEDs.
//!
//! Everything outside `src/bin` is board-agnostic and builds on the host:
//! the core works against the peripheral traits in [`hardware::traits`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// must come first so the logging macros are visible to every module
mod fmt;

pub mod config;
pub mod debounce;
pub mod error;
pub mod event_loop;
pub mod glyph;
pub mod hardware;
pub mod indicator;
pub mod render;

#[cfg(test)]
mod testing;

pub use error::PeripheralError;
