//! Display refresh task
//!
//! One multiplexing step per tick. Nothing else runs at this priority.

use defmt::*;
use embassy_time::{Duration, Ticker};

use qcode_core::config::{digit_refresh_hz, DIGIT_COUNT, TICK_HZ};
use qcode_core::MultiplexedDisplay;
use qcode_hal::{PinDigitSelect, PinSegmentBus};
use qcode_hal_rp2040::RpOutput;

/// The board's display engine
pub type Display = MultiplexedDisplay<
    'static,
    PinSegmentBus<RpOutput<'static>>,
    PinDigitSelect<RpOutput<'static>, DIGIT_COUNT>,
    DIGIT_COUNT,
>;

#[embassy_executor::task]
pub async fn refresh_task(mut display: Display) {
    info!(
        "Refresh task started: {} Hz tick, {} Hz per digit",
        TICK_HZ,
        digit_refresh_hz(TICK_HZ, DIGIT_COUNT)
    );

    let mut ticker = Ticker::every(Duration::from_hz(TICK_HZ as u64));

    loop {
        ticker.next().await;
        display.refresh_step();
    }
}
