//! Character-to-visual dispatch.
//!
//! Every received byte replaces the text on the OLED. Digits additionally
//! repaint the LED matrix with their glyph; any other byte leaves the matrix
//! exactly as it was.

use crate::config::{OFF, RenderConfig};
use crate::error::PeripheralError;
use crate::glyph::{Digit, Glyph};
use crate::hardware::traits::{LedMatrix, TextDisplay};

/// Stateless renderer; only holds where and in what colour to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderDispatcher {
    config: RenderConfig,
}

impl RenderDispatcher {
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Shows `byte` on the display and, for `'0'..='9'`, its glyph on the
    /// matrix. Returns the digit that was rendered, if any.
    pub fn dispatch<D, M>(
        &self,
        byte: u8,
        display: &mut D,
        matrix: &mut M,
    ) -> Result<Option<Digit>, PeripheralError>
    where
        D: TextDisplay,
        M: LedMatrix,
    {
        self.show_char(char::from(byte), display)?;

        let digit = Digit::from_ascii(byte);
        if let Some(digit) = digit {
            self.show_glyph(digit.glyph(), matrix)?;
        }
        Ok(digit)
    }

    /// Replaces the display contents with a single character.
    pub fn show_char<D: TextDisplay>(&self, c: char, display: &mut D) -> Result<(), PeripheralError> {
        display.clear()?;
        display.draw_char(c, self.config.char_anchor)?;
        display.flush()
    }

    /// Replaces the display contents with a status line.
    pub fn show_status<D: TextDisplay>(
        &self,
        message: &str,
        display: &mut D,
    ) -> Result<(), PeripheralError> {
        display.clear()?;
        display.draw_str(message, self.config.status_anchor)?;
        display.flush()
    }

    /// Writes all 25 cells of `glyph`, then transmits once.
    pub fn show_glyph<M: LedMatrix>(&self, glyph: &Glyph, matrix: &mut M) -> Result<(), PeripheralError> {
        for (index, lit) in glyph.cells() {
            let color = if lit { self.config.glyph_color } else { OFF };
            matrix.set_pixel(index, color)?;
        }
        matrix.flush()
    }
}
