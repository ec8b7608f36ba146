use core::fmt;

/// Failure reported by a peripheral adapter.
///
/// The event loop has no recovery path for any of these; the firmware halts
/// when one reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralError {
    /// OLED bus write or controller failure
    Display,
    /// LED matrix transmission failure or out-of-range cell
    Matrix,
    /// UART receive failure
    Serial,
}

impl fmt::Display for PeripheralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display => f.write_str("display unresponsive"),
            Self::Matrix => f.write_str("led matrix write failed"),
            Self::Serial => f.write_str("serial read failed"),
        }
    }
}
