//! Configuration type definitions
//!
//! Timing constants of the reference board and the runtime knobs the
//! firmware reads from its build-time configuration file.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display refresh tick rate (Hz); fixed by the timer setup
pub const TICK_HZ: u32 = 100;

/// Number of physical digits on the reference board
pub const DIGIT_COUNT: usize = 2;

/// Lowest per-digit refresh rate that does not visibly flicker
pub const MIN_DIGIT_REFRESH_HZ: u32 = 40;

/// Default button debounce window
pub const DEBOUNCE_MS: u32 = 50;

/// Default time each code stays on screen during replay
pub const DWELL_MS: u32 = 250;

/// Longest accepted debounce window; anything slower feels unresponsive
pub const MAX_DEBOUNCE_MS: u32 = 1000;

/// Longest accepted dwell; a full 256-entry replay then takes under 9 minutes
pub const MAX_DWELL_MS: u32 = 2000;

const _: () = assert!(
    digit_refresh_hz(TICK_HZ, DIGIT_COUNT) >= MIN_DIGIT_REFRESH_HZ,
    "tick rate too low for the digit count"
);

/// Per-digit refresh rate for a given tick rate
pub const fn digit_refresh_hz(tick_hz: u32, digits: usize) -> u32 {
    if digits == 0 {
        0
    } else {
        tick_hz / digits as u32
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce window of zero would pass every bounce through
    ZeroDebounce,
    /// Presses shorter than the window would be missed
    DebounceTooLong,
    /// Replay would flash codes too fast to read
    ZeroDwell,
    /// Replay would lock the controller for too long
    DwellTooLong,
}

/// Runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QcodeConfig {
    /// Button debounce window (ms)
    pub debounce_ms: u32,
    /// Replay dwell per code (ms)
    pub dwell_ms: u32,
    /// Echo every received byte back on the serial port
    pub echo: bool,
}

impl Default for QcodeConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            dwell_ms: DWELL_MS,
            echo: true,
        }
    }
}

impl QcodeConfig {
    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::DebounceTooLong);
        }
        if self.dwell_ms == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        if self.dwell_ms > MAX_DWELL_MS {
            return Err(ConfigError::DwellTooLong);
        }
        Ok(())
    }
}
