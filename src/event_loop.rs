//! The main loop: single owner of every output peripheral.
//!
//! Button edges never touch the display or the LEDs directly. Button tasks
//! timestamp each falling edge and queue a [`ButtonPress`]; the loop drains
//! that queue and then polls the UART, so all renders happen on one context
//! and can never interleave.

use core::convert::Infallible;

use embassy_futures::yield_now;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::PRESS_QUEUE_DEPTH;
use crate::debounce::DebounceGate;
use crate::error::PeripheralError;
use crate::hardware::traits::{Led, LedMatrix, SerialInput, TextDisplay};
use crate::indicator::{ButtonPress, Indicator, IndicatorLine};
use crate::render::RenderDispatcher;

pub type PressChannel = Channel<CriticalSectionRawMutex, ButtonPress, PRESS_QUEUE_DEPTH>;
pub type PressSender<'a> = Sender<'a, CriticalSectionRawMutex, ButtonPress, PRESS_QUEUE_DEPTH>;
pub type PressReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, ButtonPress, PRESS_QUEUE_DEPTH>;

/// What a single `step` did, mostly for tests and tracing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub presses_accepted: usize,
    pub presses_debounced: usize,
    pub byte: Option<u8>,
}

pub struct EventLoop<'a, S, D, M, L> {
    serial: S,
    display: D,
    matrix: M,
    green: IndicatorLine<L>,
    blue: IndicatorLine<L>,
    presses: PressReceiver<'a>,
    renderer: RenderDispatcher,
}

impl<'a, S, D, M, L> EventLoop<'a, S, D, M, L>
where
    S: SerialInput,
    D: TextDisplay,
    M: LedMatrix,
    L: Led,
{
    /// `green` is driven by button A, `blue` by button B. Both start off
    /// with the default debounce interval.
    pub fn new(
        serial: S,
        display: D,
        matrix: M,
        green: L,
        blue: L,
        presses: PressReceiver<'a>,
        renderer: RenderDispatcher,
    ) -> Self {
        Self {
            serial,
            display,
            matrix,
            green: IndicatorLine::new(Indicator::Green, DebounceGate::default(), green),
            blue: IndicatorLine::new(Indicator::Blue, DebounceGate::default(), blue),
            presses,
            renderer,
        }
    }

    /// Blank display, dark matrix, both indicators off.
    pub fn init(&mut self) -> Result<(), PeripheralError> {
        self.display.clear()?;
        self.display.flush()?;
        self.matrix.clear();
        self.matrix.flush()?;
        self.green.sync_output();
        self.blue.sync_output();
        info!("system started, type a character");
        Ok(())
    }

    /// Handles every queued button press, then at most one serial byte.
    pub fn step(&mut self) -> Result<StepReport, PeripheralError> {
        let mut report = StepReport::default();

        while let Ok(press) = self.presses.try_receive() {
            if self.handle_press(press)? {
                report.presses_accepted += 1;
            } else {
                report.presses_debounced += 1;
            }
        }

        if self.serial.is_readable()? {
            let byte = self.serial.read_byte()?;
            info!("received: {}", char::from(byte));
            self.renderer.dispatch(byte, &mut self.display, &mut self.matrix)?;
            report.byte = Some(byte);
        }

        Ok(report)
    }

    /// Runs forever; only a peripheral failure ends the loop.
    pub async fn run(&mut self) -> Result<Infallible, PeripheralError> {
        loop {
            self.step()?;
            yield_now().await;
        }
    }

    /// Debounces and applies one press. Returns whether it was accepted.
    pub fn handle_press(&mut self, press: ButtonPress) -> Result<bool, PeripheralError> {
        let line = match press.indicator {
            Indicator::Green => &mut self.green,
            Indicator::Blue => &mut self.blue,
        };

        let Some(is_on) = line.handle_press(press.at) else {
            debug!("button {} bounce ignored", press.indicator.button_label());
            return Ok(false);
        };

        info!(
            "button {} pressed, {} LED: {}",
            press.indicator.button_label(),
            press.indicator.color_name(),
            if is_on { "on" } else { "off" }
        );
        self.renderer
            .show_status(press.indicator.status_message(is_on), &mut self.display)?;
        Ok(true)
    }

    pub fn indicator(&self, indicator: Indicator) -> &IndicatorLine<L> {
        match indicator {
            Indicator::Green => &self.green,
            Indicator::Blue => &self.blue,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn matrix(&self) -> &M {
        &self.matrix
    }
}
