use smart_leds::{RGB8, SmartLedsWrite};

use super::traits::LedMatrix;
use crate::config::{MATRIX_LEDS, OFF};
use crate::error::PeripheralError;

/// 5x5 addressable matrix with a local frame buffer.
///
/// `clear` and `set_pixel` only edit the buffer; `flush` sends all 25 cells
/// in one transmission so a half-drawn frame is never shown.
pub struct LedMatrix5x5<W> {
    writer: W,
    frame: [RGB8; MATRIX_LEDS],
}

impl<W> LedMatrix5x5<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [OFF; MATRIX_LEDS],
        }
    }

    pub const fn frame(&self) -> &[RGB8; MATRIX_LEDS] {
        &self.frame
    }
}

impl<W> LedMatrix for LedMatrix5x5<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn clear(&mut self) {
        self.frame = [OFF; MATRIX_LEDS];
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PeripheralError> {
        let cell = self.frame.get_mut(index).ok_or(PeripheralError::Matrix)?;
        *cell = color;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.writer
            .write(self.frame.iter().copied())
            .map_err(|_| PeripheralError::Matrix)
    }
}
