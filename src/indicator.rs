//! Push-button indicator lines: debounce gate, toggle state and output.

use embassy_time::Instant;

use crate::debounce::DebounceGate;
use crate::hardware::traits::Led;

/// Which button/LED pair an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indicator {
    /// Button A, green LED
    Green,
    /// Button B, blue LED
    Blue,
}

impl Indicator {
    pub const fn button_label(self) -> char {
        match self {
            Self::Green => 'A',
            Self::Blue => 'B',
        }
    }

    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Status text shown on the OLED after a toggle.
    pub const fn status_message(self, is_on: bool) -> &'static str {
        match (self, is_on) {
            (Self::Green, true) => "Green LED on",
            (Self::Green, false) => "Green LED off",
            (Self::Blue, true) => "Blue LED on",
            (Self::Blue, false) => "Blue LED off",
        }
    }
}

/// On/off state of one indicator. Starts `Off`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToggleState {
    is_on: bool,
}

impl ToggleState {
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Flips the state and returns the new value.
    pub fn flip(&mut self) -> bool {
        self.is_on = !self.is_on;
        self.is_on
    }
}

/// A button press, timestamped when the edge was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPress {
    pub indicator: Indicator,
    pub at: Instant,
}

impl ButtonPress {
    pub const fn new(indicator: Indicator, at: Instant) -> Self {
        Self { indicator, at }
    }
}

/// Everything one button owns: its gate, its state and the LED it drives.
pub struct IndicatorLine<L> {
    indicator: Indicator,
    gate: DebounceGate,
    state: ToggleState,
    output: L,
}

impl<L: Led> IndicatorLine<L> {
    pub fn new(indicator: Indicator, gate: DebounceGate, output: L) -> Self {
        Self {
            indicator,
            gate,
            state: ToggleState::default(),
            output,
        }
    }

    /// Debounces a press and, if accepted, flips the state and drives the
    /// output. Returns the new state, or `None` for a bounce.
    pub fn handle_press(&mut self, at: Instant) -> Option<bool> {
        if !self.gate.accept(at) {
            return None;
        }
        let is_on = self.state.flip();
        self.output.set(is_on);
        Some(is_on)
    }

    /// Forces the output to match the current state.
    pub fn sync_output(&mut self) {
        self.output.set(self.state.is_on());
    }

    pub const fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }

    pub fn output(&self) -> &L {
        &self.output
    }
}
