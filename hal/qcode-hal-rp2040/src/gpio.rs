//! GPIO adapters
//!
//! Thin newtypes so the core can drive embassy-rp pins through the
//! `qcode-hal` traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use qcode_hal::{InputPin, OutputPin};

/// Push-pull output
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        Self(Output::new(pin, initial))
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Digital input with the internal pull configured
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, pull: Pull) -> Self {
        Self(Input::new(pin, pull))
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Turn a set of pins into outputs, all starting at `initial`
///
/// Segment lines start `High` (unlit, active-low) and digit enables start
/// `Low` (off), so nothing flashes before the first refresh.
pub fn outputs<'d, const N: usize>(pins: [Peri<'d, AnyPin>; N], initial: Level) -> [RpOutput<'d>; N] {
    pins.map(|pin| RpOutput::new(pin, initial))
}
