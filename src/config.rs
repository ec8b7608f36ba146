//! Compile-time configuration.
//!
//! Timing, layout and colour constants shared by the core and the firmware
//! binary. Pin assignments live in the binary next to the peripheral
//! bring-up.

use embassy_time::Duration;
use embedded_graphics::prelude::Point;
use smart_leds::RGB8;

/// Minimum spacing between two accepted presses of the same button.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(200);

/// Top-left corner of the single received character on the OLED.
pub const CHAR_ANCHOR: Point = Point::new(40, 20);

/// Top-left corner of indicator status messages on the OLED.
pub const STATUS_ANCHOR: Point = Point::new(10, 20);

/// Colour of lit glyph cells on the LED matrix.
pub const GLYPH_COLOR: RGB8 = RGB8::new(0, 255, 0);

/// Colour of unlit glyph cells.
pub const OFF: RGB8 = RGB8::new(0, 0, 0);

/// Cells per row and per column of the LED matrix.
pub const MATRIX_SIDE: usize = 5;

/// Total cells on the LED matrix.
pub const MATRIX_LEDS: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Button presses that may wait for the event loop before senders block.
pub const PRESS_QUEUE_DEPTH: usize = 4;

pub const UART_BAUD: u32 = 115_200;
pub const OLED_I2C_KHZ: u32 = 400;

/// SPI clock for the WS2812 data line. Three SPI bits per WS2812 bit gives a
/// 1.33 us bit period at this rate.
pub const WS2812_SPI_HZ: u32 = 2_250_000;

/// Where and in what colour the [`RenderDispatcher`](crate::render::RenderDispatcher)
/// draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub char_anchor: Point,
    pub status_anchor: Point,
    pub glyph_color: RGB8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            char_anchor: CHAR_ANCHOR,
            status_anchor: STATUS_ANCHOR,
            glyph_color: GLYPH_COLOR,
        }
    }
}
