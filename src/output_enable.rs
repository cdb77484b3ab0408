use embedded_hal::digital::OutputPin;

/// Control over the chip's active-low output-enable pin.
///
/// The pin gates all 16 outputs at once without touching chip registers,
/// which is useful for blanking outputs during bring-up. Construction parks
/// the pin high, so outputs stay disabled until [`enable`](Self::enable).
pub struct OutputEnable<P> {
    pin: P,
}

impl<P: OutputPin> OutputEnable<P> {
    pub fn new(mut pin: P) -> Result<Self, P::Error> {
        pin.set_high()?;
        Ok(Self { pin })
    }

    /// Drives the pin low, connecting the outputs.
    pub fn enable(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    /// Drives the pin high, floating all outputs regardless of channel state.
    pub fn disable(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct FakePin {
        high: bool,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn starts_disabled_and_toggles() {
        let mut oe = OutputEnable::new(FakePin::default()).unwrap();
        assert!(oe.pin.high);

        oe.enable().unwrap();
        assert!(!oe.pin.high);

        oe.disable().unwrap();
        assert!(oe.release().high);
    }
}
