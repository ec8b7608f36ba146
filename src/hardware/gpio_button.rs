use embassy_time::Instant;
use embedded_hal_async::digital::Wait;

use crate::indicator::{ButtonPress, Indicator};

/// Push button wired to ground with a pull-up; a press is a falling edge.
///
/// The press is timestamped as soon as the edge is observed so debouncing
/// sees signal time, not the time the event loop got round to it. The stamp
/// is taken when this task is next polled, so it can lag the interrupt by one
/// blocking OLED flush (about 25 ms at 400 kHz).
pub struct GpioButton<P> {
    pin: P,
    indicator: Indicator,
}

impl<P: Wait> GpioButton<P> {
    pub fn new(pin: P, indicator: Indicator) -> Self {
        Self { pin, indicator }
    }

    pub async fn wait_for_press(&mut self) -> Result<ButtonPress, P::Error> {
        self.pin.wait_for_falling_edge().await?;
        Ok(ButtonPress::new(self.indicator, Instant::now()))
    }

    pub const fn indicator(&self) -> Indicator {
        self.indicator
    }
}
