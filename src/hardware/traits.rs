use embedded_graphics::prelude::Point;
use smart_leds::RGB8;

use crate::error::PeripheralError;

/// Indicator output driven by a GPIO.
pub trait Led {
    fn on(&mut self);
    fn off(&mut self);

    fn set(&mut self, on: bool) {
        if on { self.on() } else { self.off() }
    }
}

/// Buffered monochrome text surface.
///
/// Drawing only touches the buffer; nothing is visible until `flush`.
pub trait TextDisplay {
    fn clear(&mut self) -> Result<(), PeripheralError>;
    fn draw_char(&mut self, c: char, at: Point) -> Result<(), PeripheralError>;
    fn draw_str(&mut self, text: &str, at: Point) -> Result<(), PeripheralError>;
    fn flush(&mut self) -> Result<(), PeripheralError>;
}

/// Buffered addressable LED matrix, cells numbered row-major from 0.
pub trait LedMatrix {
    fn clear(&mut self);
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PeripheralError>;
    /// Transmits the whole buffer as one frame.
    fn flush(&mut self) -> Result<(), PeripheralError>;
}

/// Byte-oriented serial receiver polled by the event loop.
pub trait SerialInput {
    fn is_readable(&mut self) -> Result<bool, PeripheralError>;
    /// Reads one byte. Only called after `is_readable` returned `true`.
    fn read_byte(&mut self) -> Result<u8, PeripheralError>;
}
