//! RP2040-specific HAL for the POST code display
//!
//! Implements the `qcode-hal` traits on top of `embassy-rp`:
//!
//! - GPIO outputs and inputs for the segment bus, digit enables,
//!   button and activity LED
//! - Serial echo over a (buffered) UART transmitter
//! - Millisecond clock from the embassy time driver
//! - Pin degradation helper for board setup

#![no_std]

pub mod gpio;
pub mod pins;
pub mod time;
pub mod uart;

pub use gpio::{outputs, RpInput, RpOutput};
pub use time::EmbassyClock;
pub use uart::EchoTx;
