//! Time-division multiplexing engine
//!
//! One call to [`MultiplexedDisplay::refresh_step`] per timer tick lights
//! the next digit. At 100 Hz on two digits each digit is lit 50 times a
//! second, which the eye sees as steady.
//!
//! `refresh_step` runs in the tick context: it does a fixed amount of
//! work, never blocks and never allocates.

use qcode_hal::{DigitSelect, SegmentBus};

use super::state::DisplayState;

/// Refresh engine for an `N`-digit multiplexed display
pub struct MultiplexedDisplay<'a, S, D, const N: usize> {
    state: &'a DisplayState<N>,
    segments: S,
    digits: D,
    /// Digit currently lit (or last lit)
    active: usize,
}

impl<'a, S, D, const N: usize> MultiplexedDisplay<'a, S, D, N>
where
    S: SegmentBus,
    D: DigitSelect,
{
    const HAS_DIGITS: () = assert!(N > 0, "display needs at least one digit");

    /// Create the engine with every digit off
    ///
    /// The first `refresh_step` lights digit 0.
    pub fn new(state: &'a DisplayState<N>, mut segments: S, mut digits: D) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::HAS_DIGITS;

        digits.disable_all();
        segments.write_segments(0);

        Self {
            state,
            segments,
            digits,
            active: N - 1,
        }
    }

    /// Light the next digit
    ///
    /// Turns the current digit off, puts the next digit's pattern on the
    /// segment bus, then turns the next digit on. Returns the index now lit.
    pub fn refresh_step(&mut self) -> usize {
        let next = (self.active + 1) % N;

        self.digits.disable(self.active);
        self.segments.write_segments(self.state.frame(next));
        self.digits.enable(next);

        self.active = next;
        next
    }

    /// Index of the digit lit by the last refresh step
    pub fn active_digit(&self) -> usize {
        self.active
    }

    /// Turn everything off and give the buses back
    pub fn release(mut self) -> (S, D) {
        self.digits.disable_all();
        self.segments.write_segments(0);
        (self.segments, self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::segments::encode;
    use core::cell::RefCell;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Segments(u8),
        Enable(usize),
        Disable(usize),
        DisableAll,
    }

    /// Records bus activity from both buses in one log
    struct Recorder<'a>(&'a RefCell<Vec<Op>>);

    impl SegmentBus for Recorder<'_> {
        fn write_segments(&mut self, pattern: u8) {
            self.0.borrow_mut().push(Op::Segments(pattern));
        }
    }

    impl DigitSelect for Recorder<'_> {
        fn enable(&mut self, digit: usize) {
            self.0.borrow_mut().push(Op::Enable(digit));
        }

        fn disable(&mut self, digit: usize) {
            self.0.borrow_mut().push(Op::Disable(digit));
        }

        fn disable_all(&mut self) {
            self.0.borrow_mut().push(Op::DisableAll);
        }
    }

    fn enabled_digits(log: &[Op]) -> Vec<usize> {
        log.iter()
            .filter_map(|op| match op {
                Op::Enable(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_blanks_display() {
        let log = RefCell::new(Vec::new());
        let state: DisplayState<2> = DisplayState::new();
        let mux = MultiplexedDisplay::new(&state, Recorder(&log), Recorder(&log));

        assert_eq!(*log.borrow(), [Op::DisableAll, Op::Segments(0)]);
        assert_eq!(mux.active_digit(), 1);
    }

    #[test]
    fn test_step_order_is_disable_write_enable() {
        let log = RefCell::new(Vec::new());
        let state: DisplayState<2> = DisplayState::new();
        state.set_byte(0, 0x3C).unwrap();
        state.set_dp(1, true).unwrap();

        let mut mux = MultiplexedDisplay::new(&state, Recorder(&log), Recorder(&log));
        log.borrow_mut().clear();

        assert_eq!(mux.refresh_step(), 0);
        assert_eq!(mux.refresh_step(), 1);

        assert_eq!(
            *log.borrow(),
            [
                Op::Disable(1),
                Op::Segments(encode(0x3, false)),
                Op::Enable(0),
                Op::Disable(0),
                Op::Segments(encode(0xC, true)),
                Op::Enable(1),
            ]
        );
    }

    #[test]
    fn test_picks_up_state_changes() {
        let log = RefCell::new(Vec::new());
        let state: DisplayState<2> = DisplayState::new();
        let mut mux = MultiplexedDisplay::new(&state, Recorder(&log), Recorder(&log));

        mux.refresh_step();
        mux.refresh_step();
        state.set_hex(0, 0xE).unwrap();
        log.borrow_mut().clear();
        mux.refresh_step();

        assert!(log.borrow().contains(&Op::Segments(encode(0xE, false))));
    }

    #[test]
    fn test_single_digit_display() {
        let log = RefCell::new(Vec::new());
        let state: DisplayState<1> = DisplayState::new();
        let mut mux = MultiplexedDisplay::new(&state, Recorder(&log), Recorder(&log));

        assert_eq!(mux.refresh_step(), 0);
        assert_eq!(mux.refresh_step(), 0);
    }

    #[test]
    fn test_release_turns_everything_off() {
        let log = RefCell::new(Vec::new());
        let state: DisplayState<2> = DisplayState::new();
        let mut mux = MultiplexedDisplay::new(&state, Recorder(&log), Recorder(&log));
        mux.refresh_step();
        log.borrow_mut().clear();

        let _ = mux.release();
        assert_eq!(*log.borrow(), [Op::DisableAll, Op::Segments(0)]);
    }

    proptest! {
        #[test]
        fn prop_cycles_in_order_without_skips(steps in 0usize..200) {
            let log = RefCell::new(Vec::new());
            let state: DisplayState<4> = DisplayState::new();
            let mut mux = MultiplexedDisplay::new(&state, Recorder(&log), Recorder(&log));

            for _ in 0..steps {
                mux.refresh_step();
            }

            let visits = enabled_digits(&log.borrow());
            prop_assert_eq!(visits.len(), steps);
            for (i, digit) in visits.iter().enumerate() {
                prop_assert_eq!(*digit, i % 4);
            }
            for digit in 0..4 {
                let count = visits.iter().filter(|&&d| d == digit).count();
                prop_assert!(count >= steps / 4);
            }
        }
    }
}
