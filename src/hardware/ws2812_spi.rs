//! WS2812 data line generated from an SPI MOSI pin.
//!
//! Every WS2812 bit becomes three SPI bits: `100` for 0 and `110` for 1,
//! colours sent G, R, B with the most significant bit first. A run of zero
//! bytes after the frame holds the line low long enough to latch.

use embedded_hal::spi::SpiBus;
use smart_leds::{RGB8, SmartLedsWrite};

/// SPI bytes per LED: 24 colour bits x 3.
pub const BYTES_PER_LED: usize = 9;

/// Zero bytes sent after a frame; ~280 us at the configured clock.
pub const RESET_BYTES: usize = 80;

pub struct Ws2812Spi<SPI> {
    spi: SPI,
}

impl<SPI: SpiBus<u8>> Ws2812Spi<SPI> {
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }
}

/// Encodes one colour into its SPI waveform.
pub fn encode_color(color: RGB8) -> [u8; BYTES_PER_LED] {
    let grb = (u32::from(color.g) << 16) | (u32::from(color.r) << 8) | u32::from(color.b);
    let mut bits: u128 = 0;
    for i in (0..24).rev() {
        let pattern = if (grb >> i) & 1 == 1 { 0b110 } else { 0b100 };
        bits = (bits << 3) | pattern;
    }
    let mut out = [0u8; BYTES_PER_LED];
    out.copy_from_slice(&bits.to_be_bytes()[16 - BYTES_PER_LED..]);
    out
}

impl<SPI: SpiBus<u8>> SmartLedsWrite for Ws2812Spi<SPI> {
    type Error = SPI::Error;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for item in iterator {
            self.spi.write(&encode_color(item.into()))?;
        }
        self.spi.write(&[0; RESET_BYTES])?;
        self.spi.flush()
    }
}
