//! Bounded history of received codes
//!
//! Keeps the most recent codes in arrival order. Once full, each new code
//! silently replaces the oldest one.

use heapless::HistoryBuffer;

/// Number of codes kept by the reference firmware
pub const HISTORY_CAPACITY: usize = 256;

/// Fixed-capacity ring buffer of POST codes
///
/// Lives for the whole run: there is no way to clear it.
pub struct CodeHistory<const N: usize = HISTORY_CAPACITY> {
    buf: HistoryBuffer<u8, N>,
    /// Codes overwritten since start-up (saturating)
    evicted: u32,
}

impl<const N: usize> Default for CodeHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CodeHistory<N> {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            buf: HistoryBuffer::new(),
            evicted: 0,
        }
    }

    /// Record a code, overwriting the oldest one when full
    pub fn push(&mut self, code: u8) {
        if self.buf.len() == N {
            self.evicted = self.evicted.saturating_add(1);
        }
        self.buf.write(code);
    }

    /// Iterate over the stored codes, oldest first
    ///
    /// Does not consume anything; call again to restart from the oldest
    /// entry.
    pub fn snapshot_oldest_first(&self) -> impl Iterator<Item = u8> + '_ {
        self.buf.oldest_ordered().copied()
    }

    /// Most recently pushed code
    pub fn latest(&self) -> Option<u8> {
        self.buf.recent().copied()
    }

    /// Number of codes stored
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of codes lost to overwriting
    pub fn evicted(&self) -> u32 {
        self.evicted
    }
}
