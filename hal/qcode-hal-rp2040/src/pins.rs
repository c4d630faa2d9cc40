//! Pin degradation for board setup
//!
//! Board modules name concrete pins (`p.PIN_7`); the drivers want
//! arrays of type-erased pins so a whole bus has one type.

/// Degrade a list of concrete pins into an array of `Peri<AnyPin>`
///
/// Usage:
/// ```ignore
/// let segments = any_pins!(p.PIN_7, p.PIN_6, p.PIN_3, p.PIN_4,
///                          p.PIN_5, p.PIN_8, p.PIN_9, p.PIN_2);
/// ```
#[macro_export]
macro_rules! any_pins {
    ($($pin:expr),+ $(,)?) => {
        [$(embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($pin)),+]
    };
}
