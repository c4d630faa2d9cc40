//! Multiplexed 7-segment display
//!
//! The display is split along its two timing domains:
//!
//! - [`DisplayState`] holds what each digit should show. The control loop
//!   writes it; it is safe to place in a `static`.
//! - [`MultiplexedDisplay`] owns the bus lines and lights one digit per
//!   timer tick, reading from a shared `DisplayState`.

pub mod mux;
pub mod segments;
pub mod state;

pub use mux::MultiplexedDisplay;
pub use segments::{encode, HEX_SEGMENTS};
pub use state::{DigitState, DisplayError, DisplayState};
