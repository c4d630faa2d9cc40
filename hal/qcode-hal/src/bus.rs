//! Multiplexed display bus abstractions
//!
//! A multiplexed 7-segment display has two sets of lines: a segment bus
//! shared by every digit, and one enable line per digit. Only one digit
//! is enabled at a time.
//!
//! The traits speak in logical terms (segment lit, digit enabled). The
//! pin-backed adapters translate that to the electrical polarity of the
//! reference board: active-low segments, active-high digit enables.

use crate::gpio::OutputPin;

/// Segment bit positions within a pattern byte
pub mod segment {
    pub const A: u8 = 1 << 0;
    pub const B: u8 = 1 << 1;
    pub const C: u8 = 1 << 2;
    pub const D: u8 = 1 << 3;
    pub const E: u8 = 1 << 4;
    pub const F: u8 = 1 << 5;
    pub const G: u8 = 1 << 6;
    /// Decimal point
    pub const DP: u8 = 1 << 7;
}

/// Shared segment lines
pub trait SegmentBus {
    /// Drive the bus so exactly the segments set in `pattern` are lit
    ///
    /// Bit 0 is segment A, bit 6 is G, bit 7 is the decimal point.
    fn write_segments(&mut self, pattern: u8);
}

/// Per-digit enable lines
pub trait DigitSelect {
    /// Turn on the digit at `digit`
    fn enable(&mut self, digit: usize);

    /// Turn off the digit at `digit`
    fn disable(&mut self, digit: usize);

    /// Turn off every digit
    fn disable_all(&mut self);
}

/// Segment bus driven by eight GPIO pins, active-low
///
/// Pins are ordered A, B, C, D, E, F, G, DP.
pub struct PinSegmentBus<P> {
    pins: [P; 8],
}

impl<P: OutputPin> PinSegmentBus<P> {
    /// Create a bus and switch every segment off
    pub fn new(pins: [P; 8]) -> Self {
        let mut bus = Self { pins };
        bus.write_segments(0);
        bus
    }

    /// Give the pins back
    pub fn release(self) -> [P; 8] {
        self.pins
    }
}

impl<P: OutputPin> SegmentBus for PinSegmentBus<P> {
    fn write_segments(&mut self, pattern: u8) {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            // Lit segment = pin pulled low
            pin.set_state(pattern & (1 << bit) == 0);
        }
    }
}

/// Digit enable lines driven by one GPIO pin each, active-high
pub struct PinDigitSelect<P, const N: usize> {
    pins: [P; N],
}

impl<P: OutputPin, const N: usize> PinDigitSelect<P, N> {
    /// Create the enable bank with every digit off
    pub fn new(pins: [P; N]) -> Self {
        let mut select = Self { pins };
        select.disable_all();
        select
    }

    /// Give the pins back
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> DigitSelect for PinDigitSelect<P, N> {
    fn enable(&mut self, digit: usize) {
        if let Some(pin) = self.pins.get_mut(digit) {
            pin.set_high();
        }
    }

    fn disable(&mut self, digit: usize) {
        if let Some(pin) = self.pins.get_mut(digit) {
            pin.set_low();
        }
    }

    fn disable_all(&mut self) {
        for pin in self.pins.iter_mut() {
            pin.set_low();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    fn levels<const N: usize>(pins: [MockPin; N]) -> [bool; N] {
        pins.map(|p| p.high)
    }

    #[test]
    fn test_segment_bus_starts_dark() {
        let bus = PinSegmentBus::new([MockPin { high: false }; 8]);
        assert_eq!(levels(bus.release()), [true; 8]);
    }

    #[test]
    fn test_segment_bus_is_active_low() {
        let mut bus = PinSegmentBus::new([MockPin::default(); 8]);

        // "1" lights B and C
        bus.write_segments(segment::B | segment::C);
        assert_eq!(
            levels(bus.release()),
            [true, false, false, true, true, true, true, true]
        );
    }

    #[test]
    fn test_segment_bus_decimal_point_is_last_pin() {
        let mut bus = PinSegmentBus::new([MockPin::default(); 8]);
        bus.write_segments(segment::DP);
        let pins = levels(bus.release());
        assert!(!pins[7]);
        assert!(pins[..7].iter().all(|&high| high));
    }

    #[test]
    fn test_digit_select_is_active_high() {
        let mut select = PinDigitSelect::new([MockPin { high: true }; 2]);

        select.enable(1);
        assert_eq!(levels(select.release()), [false, true]);
    }

    #[test]
    fn test_digit_select_disable() {
        let mut select = PinDigitSelect::new([MockPin::default(); 3]);

        select.enable(0);
        select.enable(2);
        select.disable(0);
        assert_eq!(levels(select.release()), [false, false, true]);
    }

    #[test]
    fn test_digit_select_ignores_unknown_digit() {
        let mut select = PinDigitSelect::new([MockPin::default(); 2]);

        select.enable(5);
        select.disable(7);
        assert_eq!(levels(select.release()), [false, false]);
    }
}
