//! Serial echo transmitter
//!
//! Wraps any blocking `embedded_io::Write` (in practice embassy-rp's
//! `BufferedUartTx`, which queues into its ring buffer and only blocks
//! when the buffer is full).

use embedded_io::Write;
use qcode_hal::UartTx;

pub struct EchoTx<W> {
    inner: W,
}

impl<W: Write> EchoTx<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> UartTx for EchoTx<W> {
    type Error = W::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }
}
