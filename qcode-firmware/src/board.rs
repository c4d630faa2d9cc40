//! Pin assignment for the reference board
//!
//! Raspberry Pi Pico driving a common-cathode two-digit display through
//! one transistor per digit.
//!
//! | Function          | GPIO |
//! |-------------------|------|
//! | UART0 TX / RX     | 0, 1 |
//! | Segment A-G       | 7, 6, 3, 4, 5, 8, 9 |
//! | Segment DP        | 2    |
//! | Digit 0 (left)    | 10   |
//! | Digit 1 (right)   | 11   |
//! | Replay button     | 12 (to GND, internal pull-up) |
//! | Activity LED      | 25 (on-board) |

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_0, PIN_1, UART0};
use embassy_rp::{Peri, Peripherals};
use qcode_core::config::DIGIT_COUNT;
use qcode_hal_rp2040::any_pins;

/// Everything the firmware takes from the chip
pub struct Board {
    /// Ordered A, B, C, D, E, F, G, DP
    pub segments: [Peri<'static, AnyPin>; 8],
    /// Ordered left to right
    pub digits: [Peri<'static, AnyPin>; DIGIT_COUNT],
    pub button: Peri<'static, AnyPin>,
    pub led: Peri<'static, AnyPin>,
    pub uart: Peri<'static, UART0>,
    pub uart_tx: Peri<'static, PIN_0>,
    pub uart_rx: Peri<'static, PIN_1>,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        Self {
            segments: any_pins!(
                p.PIN_7, p.PIN_6, p.PIN_3, p.PIN_4, p.PIN_5, p.PIN_8, p.PIN_9, p.PIN_2,
            ),
            digits: any_pins!(p.PIN_10, p.PIN_11),
            button: p.PIN_12.into(),
            led: p.PIN_25.into(),
            uart: p.UART0,
            uart_tx: p.PIN_0,
            uart_rx: p.PIN_1,
        }
    }
}
