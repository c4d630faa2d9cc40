//! Per-digit display state shared between timing domains
//!
//! Each digit is packed into a single atomic byte: the hex value in bits
//! 0-3 and the decimal point in bit 7. The control loop is the only
//! writer; the refresh tick only reads.
//!
//! Setters do a load followed by a store, so the tick may observe a digit
//! between two setter calls (for example a new value with the previous
//! code's decimal point). That lasts at most one refresh period and is
//! accepted.

use portable_atomic::{AtomicU8, Ordering};

use super::segments;

const VALUE_MASK: u8 = 0x0F;
const DP_BIT: u8 = 0x80;

/// Errors from the display setters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Digit index not present on this display
    DigitOutOfRange,
    /// Value does not fit in one hex digit (0-15)
    NibbleOutOfRange,
}

/// What a single digit shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitState {
    /// Hex value 0-15
    pub hex_value: u8,
    /// Decimal point lit
    pub decimal_point: bool,
}

impl DigitState {
    fn unpack(raw: u8) -> Self {
        Self {
            hex_value: raw & VALUE_MASK,
            decimal_point: raw & DP_BIT != 0,
        }
    }

    /// Segment pattern for this digit
    pub fn segments(&self) -> u8 {
        segments::encode(self.hex_value, self.decimal_point)
    }
}

// Only used as an array initialiser; each element is a fresh atomic.
#[allow(clippy::declare_interior_mutable_const)]
const BLANK: AtomicU8 = AtomicU8::new(0);

/// Pending contents of an `N`-digit display
///
/// Digit 0 is the leftmost. All digits start at `0` with the decimal
/// point off. Out-of-range arguments are rejected and leave the state
/// untouched.
pub struct DisplayState<const N: usize> {
    digits: [AtomicU8; N],
}

impl<const N: usize> Default for DisplayState<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DisplayState<N> {
    pub const fn new() -> Self {
        Self {
            digits: [BLANK; N],
        }
    }

    /// Number of digits
    pub const fn digit_count(&self) -> usize {
        N
    }

    fn cell(&self, digit: usize) -> Result<&AtomicU8, DisplayError> {
        self.digits.get(digit).ok_or(DisplayError::DigitOutOfRange)
    }

    /// Set the hex value of one digit, keeping its decimal point
    pub fn set_hex(&self, digit: usize, nibble: u8) -> Result<(), DisplayError> {
        let cell = self.cell(digit)?;
        if nibble > VALUE_MASK {
            return Err(DisplayError::NibbleOutOfRange);
        }
        let raw = cell.load(Ordering::Relaxed);
        cell.store((raw & DP_BIT) | nibble, Ordering::Relaxed);
        Ok(())
    }

    /// Show a byte as two hex digits starting at `first_digit`
    ///
    /// The high nibble goes on `first_digit`, the low nibble on the digit
    /// to its right. Decimal points are kept.
    pub fn set_byte(&self, first_digit: usize, value: u8) -> Result<(), DisplayError> {
        let second = first_digit
            .checked_add(1)
            .ok_or(DisplayError::DigitOutOfRange)?;
        // Check both positions before touching either
        self.cell(second)?;
        self.set_hex(first_digit, value >> 4)?;
        self.set_hex(second, value & VALUE_MASK)
    }

    /// Turn one digit's decimal point on or off, keeping its value
    pub fn set_dp(&self, digit: usize, enabled: bool) -> Result<(), DisplayError> {
        let cell = self.cell(digit)?;
        let raw = cell.load(Ordering::Relaxed);
        let raw = if enabled { raw | DP_BIT } else { raw & !DP_BIT };
        cell.store(raw, Ordering::Relaxed);
        Ok(())
    }

    /// Turn every decimal point on or off
    pub fn set_all_dp(&self, enabled: bool) {
        for digit in 0..N {
            // Index is in range by construction
            let _ = self.set_dp(digit, enabled);
        }
    }

    /// Read back the pending state of one digit
    pub fn digit(&self, digit: usize) -> Option<DigitState> {
        self.digits
            .get(digit)
            .map(|cell| DigitState::unpack(cell.load(Ordering::Relaxed)))
    }

    /// Display frame for one digit: the segment pattern to put on the bus
    ///
    /// Unknown digits are blank.
    pub fn frame(&self, digit: usize) -> u8 {
        self.digit(digit).map_or(0, |d| d.segments())
    }

    /// The byte shown on the two digits starting at `first_digit`
    pub fn byte(&self, first_digit: usize) -> Option<u8> {
        let high = self.digit(first_digit)?;
        let low = self.digit(first_digit.checked_add(1)?)?;
        Some((high.hex_value << 4) | low.hex_value)
    }
}
