//! Recording mock peripherals for unit tests.

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use embedded_graphics::prelude::Point;
use smart_leds::RGB8;

use crate::config::MATRIX_LEDS;
use crate::error::PeripheralError;
use crate::hardware::traits::{Led, LedMatrix, SerialInput, TextDisplay};

#[derive(Debug, Default)]
pub struct MockLed {
    on: bool,
    writes: usize,
}

impl MockLed {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Led for MockLed {
    fn on(&mut self) {
        self.on = true;
        self.writes += 1;
    }

    fn off(&mut self) {
        self.on = false;
        self.writes += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Clear,
    Char(char, Point),
    Str(String, Point),
    Flush,
}

/// Keeps every call plus the text that was visible after each flush.
#[derive(Debug, Default)]
pub struct MockDisplay {
    pub ops: Vec<DisplayOp>,
    pending: String,
    pub shown: Vec<String>,
    pub fail: bool,
}

impl MockDisplay {
    /// A display whose every flush fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl TextDisplay for MockDisplay {
    fn clear(&mut self) -> Result<(), PeripheralError> {
        self.ops.push(DisplayOp::Clear);
        self.pending.clear();
        Ok(())
    }

    fn draw_char(&mut self, c: char, at: Point) -> Result<(), PeripheralError> {
        self.ops.push(DisplayOp::Char(c, at));
        self.pending.push(c);
        Ok(())
    }

    fn draw_str(&mut self, text: &str, at: Point) -> Result<(), PeripheralError> {
        self.ops.push(DisplayOp::Str(text.into(), at));
        self.pending.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        if self.fail {
            return Err(PeripheralError::Display);
        }
        self.ops.push(DisplayOp::Flush);
        self.shown.push(self.pending.clone());
        Ok(())
    }
}

/// Frame buffer plus a copy of every transmitted frame.
#[derive(Debug)]
pub struct MockMatrix {
    pub frame: [RGB8; MATRIX_LEDS],
    pub flushed: Vec<[RGB8; MATRIX_LEDS]>,
    pub clears: usize,
}

impl Default for MockMatrix {
    fn default() -> Self {
        Self {
            frame: [RGB8::default(); MATRIX_LEDS],
            flushed: Vec::new(),
            clears: 0,
        }
    }
}

impl LedMatrix for MockMatrix {
    fn clear(&mut self) {
        self.clears += 1;
        self.frame = [RGB8::default(); MATRIX_LEDS];
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), PeripheralError> {
        let cell = self.frame.get_mut(index).ok_or(PeripheralError::Matrix)?;
        *cell = color;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PeripheralError> {
        self.flushed.push(self.frame);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockSerial {
    pub rx: VecDeque<u8>,
}

impl MockSerial {
    pub fn with_input(bytes: &[u8]) -> Self {
        Self {
            rx: bytes.iter().copied().collect(),
        }
    }
}

impl SerialInput for MockSerial {
    fn is_readable(&mut self) -> Result<bool, PeripheralError> {
        Ok(!self.rx.is_empty())
    }

    fn read_byte(&mut self) -> Result<u8, PeripheralError> {
        self.rx.pop_front().ok_or(PeripheralError::Serial)
    }
}
