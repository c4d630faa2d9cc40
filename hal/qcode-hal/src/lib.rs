//! Qcode Hardware Abstraction Layer
//!
//! This crate defines the capabilities the display core needs from the
//! board. Chip-specific HALs implement them; the core never touches a
//! register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (qcode-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  qcode-core (button, history, display)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  qcode-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  qcode-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`bus::SegmentBus`], [`bus::DigitSelect`] - Multiplexed display lines
//! - [`uart::UartTx`] - Serial echo
//! - [`time::Monotonic`] - Millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod gpio;
pub mod time;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use bus::{DigitSelect, PinDigitSelect, PinSegmentBus, SegmentBus};
pub use gpio::{InputPin, OutputPin};
pub use time::Monotonic;
pub use uart::UartTx;
