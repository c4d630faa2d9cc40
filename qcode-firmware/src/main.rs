//! Qcode - POST Code Display Firmware
//!
//! Main firmware binary for RP2040-based POST code readers. Shows the
//! latest byte received on UART0 as two hex digits on a multiplexed
//! 7-segment display, and replays the last 256 codes when the button
//! is pressed.
//!
//! Two timing domains:
//!
//! - Display refresh: interrupt executor on `SWI_IRQ_1`, 100 Hz ticker
//! - Control loop: thread-mode executor, serial input and button

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use qcode_core::MultiplexedDisplay;
use qcode_hal::{PinDigitSelect, PinSegmentBus};
use qcode_hal_rp2040::{outputs, RpInput, RpOutput};

mod board;
mod config;
mod shared;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Runs the display refresh, preempting the control loop
static REFRESH_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    REFRESH_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Qcode firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = board::Board::new(p);
    info!("Peripherals initialized");

    let qcode_config = config::load();

    // Display: segments start unlit (active-low), digits off
    let segments = PinSegmentBus::new(outputs(board.segments, Level::High));
    let digits = PinDigitSelect::new(outputs(board.digits, Level::Low));
    let display: tasks::Display =
        MultiplexedDisplay::new(&shared::DISPLAY_STATE, segments, digits);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let refresh_spawner = REFRESH_EXECUTOR.start(interrupt::SWI_IRQ_1);
    refresh_spawner.spawn(tasks::refresh_task(display)).unwrap();

    // Serial link to the host under test
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config::BAUDRATE;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(board.uart, board.uart_tx, board.uart_rx, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART0 initialized at {} baud", config::BAUDRATE);

    let button = RpInput::new(board.button, Pull::Up);
    let led = RpOutput::new(board.led, Level::Low);

    spawner
        .spawn(tasks::control_task(rx, tx, button, led, qcode_config))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
