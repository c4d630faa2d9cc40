//! Board-agnostic core logic for the POST code display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Debounced push-button state machine
//! - Bounded history of received codes
//! - Multiplexed 7-segment display state and refresh engine
//! - Controller tying byte arrival and button presses to the display
//! - Configuration type definitions
//!
//! Hardware is reached only through the `qcode-hal` traits and
//! `embedded_hal::delay::DelayNs`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod config;
pub mod controller;
pub mod display;
pub mod history;

pub use button::{ButtonEvent, ButtonState, DebouncedButton, Debouncer};
pub use config::QcodeConfig;
pub use controller::{CodeController, ReplayOutcome};
pub use display::{DigitState, DisplayError, DisplayState, MultiplexedDisplay};
pub use history::CodeHistory;
