//! SSD1306 128x64 OLED over I2C, driven through `embedded-graphics`.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use ssd1306::{
    I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*,
};

use super::traits::TextDisplay;
use crate::error::PeripheralError;

/// Large font for the single received character.
pub const CHAR_STYLE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&FONT_10X20, BinaryColor::On);

/// Small font so the longest status message fits on one line.
pub const STATUS_STYLE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

/// Draws `text` with its top-left corner at `at`.
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    at: Point,
    style: MonoTextStyle<'_, BinaryColor>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Text::with_baseline(text, at, style, Baseline::Top).draw(target)?;
    Ok(())
}

type Driver<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct OledDisplay<I2C> {
    driver: Driver<I2C>,
}

impl<I2C: I2c> OledDisplay<I2C> {
    /// Brings up the controller and blanks its frame buffer.
    pub fn new(i2c: I2C) -> Result<Self, PeripheralError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().map_err(|_| PeripheralError::Display)?;
        driver.clear_buffer();
        Ok(Self { driver })
    }
}

impl<I2C: I2c> TextDisplay for OledDisplay<I2C> {
    fn clear(&mut self) -> Result<(), PeripheralError> {
        self.driver.clear_buffer();
        Ok(())
    }

    fn draw_char(&mut self, c: char, at: Point) -> Result<(), PeripheralError> {
        let mut buf = [0u8; 4];
        draw_text(&mut self.driver, c.encode_utf8(&mut buf), at, CHAR_STYLE)
            .map_err(|_| PeripheralError::Display)
    }

    fn draw_str(&mut self, text: &str, at: Point) -> Result<(), PeripheralError> {
        draw_text(&mut self.driver, text, at, STATUS_STYLE).map_err(|_| PeripheralError::Display)
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.driver.flush().map_err(|_| PeripheralError::Display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::primitives::Rectangle;

    fn lit_pixels(display: &MockDisplay<BinaryColor>) -> std::vec::Vec<Point> {
        let mut points = std::vec::Vec::new();
        for y in 0..64 {
            for x in 0..64 {
                let p = Point::new(x, y);
                if display.get_pixel(p) == Some(BinaryColor::On) {
                    points.push(p);
                }
            }
        }
        points
    }

    #[test]
    fn test_char_drawn_inside_its_cell() {
        let mut display = MockDisplay::new();
        let anchor = Point::new(40, 20);

        draw_text(&mut display, "8", anchor, CHAR_STYLE).unwrap();

        let cell = Rectangle::new(anchor, Size::new(10, 20));
        let lit = lit_pixels(&display);
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|p| cell.contains(*p)));
    }

    #[test]
    fn test_status_line_height() {
        let mut display = MockDisplay::new();
        let anchor = Point::new(2, 20);

        draw_text(&mut display, "LED on", anchor, STATUS_STYLE).unwrap();

        let line = Rectangle::new(anchor, Size::new(6 * 6, 10));
        let lit = lit_pixels(&display);
        assert!(!lit.is_empty());
        assert!(lit.iter().all(|p| line.contains(*p)));
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut display = MockDisplay::<BinaryColor>::new();
        draw_text(&mut display, " ", Point::new(40, 20), CHAR_STYLE).unwrap();
        assert!(lit_pixels(&display).is_empty());
    }
}
