//! 5x5 digit bitmaps for the LED matrix.
//!
//! Each glyph row is a 5-bit value; bit 4 is the leftmost column.

use crate::config::MATRIX_SIDE;

/// A decimal digit. Only these ten values can reach the glyph table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Digit {
    Zero = 0,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    /// Maps an ASCII `'0'..='9'` byte to its digit, anything else to `None`.
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'0' => Some(Self::Zero),
            b'1' => Some(Self::One),
            b'2' => Some(Self::Two),
            b'3' => Some(Self::Three),
            b'4' => Some(Self::Four),
            b'5' => Some(Self::Five),
            b'6' => Some(Self::Six),
            b'7' => Some(Self::Seven),
            b'8' => Some(Self::Eight),
            b'9' => Some(Self::Nine),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn glyph(self) -> &'static Glyph {
        glyph_for(self)
    }
}

/// One 5x5 bitmap, top row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph([u8; MATRIX_SIDE]);

impl Glyph {
    pub const fn rows(&self) -> &[u8; MATRIX_SIDE] {
        &self.0
    }

    /// Whether the cell at `row`, `col` is lit. Coordinates past the edge are unlit.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        if col >= MATRIX_SIDE {
            return false;
        }
        self.0
            .get(row)
            .is_some_and(|bits| bits & (1 << (MATRIX_SIDE - 1 - col)) != 0)
    }

    /// Every cell in row-major order as `(matrix index, lit)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..MATRIX_SIDE).flat_map(move |row| {
            (0..MATRIX_SIDE).map(move |col| (row * MATRIX_SIDE + col, self.is_lit(row, col)))
        })
    }
}

static GLYPHS: [Glyph; 10] = [
    Glyph([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // 0
    Glyph([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]), // 1
    Glyph([0b01110, 0b00001, 0b01110, 0b10000, 0b11111]), // 2
    Glyph([0b01110, 0b00001, 0b00110, 0b00001, 0b01110]), // 3
    Glyph([0b00010, 0b00110, 0b01010, 0b11111, 0b00010]), // 4
    Glyph([0b11111, 0b10000, 0b11110, 0b00001, 0b11110]), // 5
    Glyph([0b01111, 0b10000, 0b11110, 0b10001, 0b01110]), // 6
    Glyph([0b11111, 0b00001, 0b00010, 0b00100, 0b01000]), // 7
    Glyph([0b01110, 0b10001, 0b01110, 0b10001, 0b01110]), // 8
    Glyph([0b01110, 0b10001, 0b01111, 0b00001, 0b01110]), // 9
];

/// Bitmap for `digit`. The table has one entry per `Digit` variant.
pub fn glyph_for(digit: Digit) -> &'static Glyph {
    &GLYPHS[digit as usize]
}
