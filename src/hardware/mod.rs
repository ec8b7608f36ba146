//! Peripheral adapters behind the traits the event loop talks to.
//!
//! Each adapter is generic over an `embedded-hal`, `embedded-io` or
//! `smart-leds` trait so it can be exercised on the host; the firmware
//! binary plugs in the embassy-stm32 drivers.

pub mod gpio_button;
pub mod gpio_led;
pub mod led_matrix;
pub mod oled;
pub mod traits;
pub mod uart_serial;
pub mod ws2812_spi;
