//! POST code controller
//!
//! Sequences everything the control loop does:
//!
//! - A byte arrives: it becomes the current code, goes into the history,
//!   is shown on the display and is optionally echoed.
//! - The button is pressed: the history is replayed on the display, oldest
//!   first, one code per dwell period. The decimal point alternates
//!   between the two digits so repeated codes can be told apart.
//!
//! Replay blocks the caller for `history.len() * dwell_ms`. While it runs
//! no bytes are read and the button is not sampled; there is no way to
//! cancel it.

use embedded_hal::delay::DelayNs;
use qcode_hal::UartTx;

use crate::button::ButtonEvent;
use crate::config::QcodeConfig;
use crate::display::DisplayState;
use crate::history::{CodeHistory, HISTORY_CAPACITY};

/// What a button event led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplayOutcome {
    /// Not a press
    Ignored,
    /// Pressed, but nothing recorded yet
    Empty,
    /// Replayed this many codes
    Replayed { codes: usize },
}

/// Top-level controller
///
/// `D` is the display digit count (at least 2), `H` the history capacity.
pub struct CodeController<'a, Dl, Tx, const D: usize, const H: usize = HISTORY_CAPACITY> {
    display: &'a DisplayState<D>,
    history: CodeHistory<H>,
    current: u8,
    delay: Dl,
    tx: Tx,
    config: QcodeConfig,
}

impl<'a, Dl, Tx, const D: usize, const H: usize> CodeController<'a, Dl, Tx, D, H>
where
    Dl: DelayNs,
    Tx: UartTx,
{
    const FITS_A_BYTE: () = assert!(D >= 2, "a POST code needs two digits");

    /// Create the controller and show code 00
    pub fn new(display: &'a DisplayState<D>, delay: Dl, tx: Tx, config: QcodeConfig) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS_A_BYTE;

        let controller = Self {
            display,
            history: CodeHistory::new(),
            current: 0x00,
            delay,
            tx,
            config,
        };
        controller.show_current();
        controller
    }

    /// Handle one received byte
    ///
    /// The code is recorded and displayed before the echo is attempted, so
    /// an echo failure never loses a code.
    pub fn on_byte_received(&mut self, code: u8) -> Result<(), Tx::Error> {
        self.current = code;
        self.history.push(code);
        show(self.display, code);

        if self.config.echo {
            self.tx.write_byte(code)?;
        }
        Ok(())
    }

    /// Handle a debounced button event
    pub fn on_button_event(&mut self, event: ButtonEvent) -> ReplayOutcome {
        if event != ButtonEvent::Pressed {
            return ReplayOutcome::Ignored;
        }

        let codes = self.replay();
        self.show_current();

        if codes == 0 {
            ReplayOutcome::Empty
        } else {
            ReplayOutcome::Replayed { codes }
        }
    }

    fn replay(&mut self) -> usize {
        let Self {
            display,
            history,
            delay,
            config,
            ..
        } = self;

        let mut left = true;
        let mut shown = 0;
        for code in history.snapshot_oldest_first() {
            show(display, code);
            // Both indices exist: D >= 2
            let _ = display.set_dp(0, left);
            let _ = display.set_dp(1, !left);
            left = !left;

            delay.delay_ms(config.dwell_ms);
            shown += 1;
        }
        shown
    }

    /// Back to the latest code, no decimal points
    fn show_current(&self) {
        show(self.display, self.current);
        self.display.set_all_dp(false);
    }

    /// Most recently received code (0x00 before any)
    pub fn current_code(&self) -> u8 {
        self.current
    }

    pub fn history(&self) -> &CodeHistory<H> {
        &self.history
    }
}

fn show<const D: usize>(display: &DisplayState<D>, code: u8) {
    // Only fails for D < 2, which the controller rejects at compile time
    let _ = display.set_byte(0, code);
}
