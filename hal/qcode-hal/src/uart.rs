//! UART serial communication abstractions
//!
//! Only the transmit side is abstracted: inbound POST codes are read by
//! the firmware's control loop and handed to the core one byte at a time.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been queued or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write a single byte
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_blocking(&[byte])
    }
}

/// Transmitter that discards everything
///
/// Used when serial echo is compiled out.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoTx;

impl UartTx for NoTx {
    type Error = core::convert::Infallible;

    fn write_blocking(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}
