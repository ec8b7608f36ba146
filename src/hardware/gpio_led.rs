use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use super::traits::Led;

/// Indicator LED on a push-pull GPIO.
pub struct GpioLed<P> {
    pin: P,
    active_low: bool,
}

impl<P> GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    /// LED lights when the pin is driven high.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// LED lights when the pin is driven low (e.g. the Blue Pill's PC13).
    pub fn new_active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    fn drive(&mut self, lit: bool) {
        let Ok(()) = if lit != self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

impl<P> Led for GpioLed<P>
where
    P: OutputPin<Error = Infallible>,
{
    fn on(&mut self) {
        self.drive(true);
    }

    fn off(&mut self) {
        self.drive(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::{ErrorType, StatefulOutputPin};

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for MockPin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_active_high() {
        let mut led = GpioLed::new(MockPin { high: false });
        led.set(true);
        assert!(led.pin.high);
        led.set(false);
        assert!(!led.pin.high);
    }

    #[test]
    fn test_active_low() {
        let mut led = GpioLed::new_active_low(MockPin { high: false });
        led.on();
        assert!(!led.pin.is_set_high().unwrap());
        led.off();
        assert!(led.pin.is_set_high().unwrap());
    }
}
