//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use qcode_hal::Monotonic;

/// Milliseconds since boot, truncated to `u32`
///
/// Wraps after ~49.7 days, which the debouncer handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
