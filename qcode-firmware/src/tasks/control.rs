//! Main control loop
//!
//! Each iteration:
//!
//! 1. Samples the replay button; a committed press replays the history
//!    (blocking this task for `history_len * dwell_ms`)
//! 2. Waits up to `POLL_INTERVAL` for one byte from the serial port and
//!    hands it to the controller
//! 3. Lights the activity LED if a byte arrived, clears it otherwise
//!
//! Bytes that arrive during a replay wait in the UART ring buffer and are
//! processed afterwards.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::{Delay, Duration, Timer};
use embedded_io_async::Read;

use qcode_core::config::DIGIT_COUNT;
use qcode_core::{CodeController, DebouncedButton, QcodeConfig, ReplayOutcome};
use qcode_hal::OutputPin;
use qcode_hal_rp2040::{EchoTx, EmbassyClock, RpInput, RpOutput};

use crate::shared::DISPLAY_STATE;

/// Longest wait for a byte before the button is sampled again
const POLL_INTERVAL: Duration = Duration::from_millis(1);

#[embassy_executor::task]
pub async fn control_task(
    mut rx: BufferedUartRx,
    tx: BufferedUartTx,
    button: RpInput<'static>,
    mut led: RpOutput<'static>,
    config: QcodeConfig,
) {
    info!("Control task started");

    let mut button = DebouncedButton::new(button, EmbassyClock, config.debounce_ms);
    let mut controller: CodeController<'_, _, _, DIGIT_COUNT> =
        CodeController::new(&DISPLAY_STATE, Delay, EchoTx::new(tx), config);

    let mut buf = [0u8; 1];

    loop {
        match controller.on_button_event(button.sample()) {
            ReplayOutcome::Ignored => {}
            ReplayOutcome::Empty => debug!("Replay requested, history empty"),
            ReplayOutcome::Replayed { codes } => {
                debug!("Replayed {} codes, back on {=u8:02X}", codes, controller.current_code())
            }
        }

        let polled = select(rx.read(&mut buf), Timer::after(POLL_INTERVAL)).await;
        let received = match polled {
            Either::First(Ok(n)) if n > 0 => Some(buf[0]),
            Either::First(Ok(_)) => None,
            Either::First(Err(e)) => {
                warn!("UART read error: {:?}", e);
                None
            }
            Either::Second(()) => None,
        };

        led.set_state(received.is_some());

        if let Some(code) = received {
            debug!(
                "POST code {=u8:02X} ({} in history)",
                code,
                controller.history().len() + 1
            );
            if let Err(e) = controller.on_byte_received(code) {
                warn!("Echo failed: {:?}", e);
            }
        } else {
            trace!("Idle");
        }
    }
}
