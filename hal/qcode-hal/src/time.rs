//! Time source abstraction

/// Free-running millisecond clock
///
/// The value wraps at `u32::MAX`; consumers compare timestamps with
/// `wrapping_sub`.
pub trait Monotonic {
    /// Milliseconds since an arbitrary fixed epoch (usually boot)
    fn now_ms(&self) -> u32;
}

impl<M: Monotonic + ?Sized> Monotonic for &M {
    fn now_ms(&self) -> u32 {
        M::now_ms(self)
    }
}
