//! Debounced push button
//!
//! The replay button is a mechanical switch to ground with a pull-up, so
//! the line reads low while pressed. Contact bounce produces a burst of
//! edges on every press and release; the debouncer only commits a new
//! level once the raw input has held still for the debounce window.
//!
//! ```text
//!            raw low, stable >= window
//!   Released ─────────────────────────▶ Pressed
//!      ▲                                   │
//!      └───────────────────────────────────┘
//!            raw high, stable >= window
//! ```
//!
//! There is no terminal state. Sampling is expected to happen far faster
//! than the window (every main-loop iteration).

use qcode_hal::{InputPin, Monotonic};

/// Outcome of one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing committed this sample
    NoChange,
    /// Stable press (falling edge on the active-low input)
    Pressed,
    /// Stable release (rising edge)
    Released,
}

/// Button state as seen after the latest sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released and settled
    Idle,
    /// Press committed on this sample
    Pressed,
    /// Still pressed after the press was committed
    Held,
    /// Release committed on this sample
    Released,
}

/// Pin-independent debounce state machine
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u32,
    /// Last raw sample (true = pressed)
    last_raw: bool,
    /// Committed level (true = pressed)
    stable: bool,
    state: ButtonState,
    last_raw_change_ms: u32,
    last_stable_change_ms: u32,
}

impl Debouncer {
    /// Create a debouncer that starts out released
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_raw: false,
            stable: false,
            state: ButtonState::Idle,
            last_raw_change_ms: 0,
            last_stable_change_ms: 0,
        }
    }

    /// Feed one raw sample taken at `now_ms`
    ///
    /// Returns at most one edge per physical transition.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> ButtonEvent {
        if pressed != self.last_raw {
            // Still moving: restart the window
            self.last_raw = pressed;
            self.last_raw_change_ms = now_ms;
            self.settle();
            return ButtonEvent::NoChange;
        }

        let steady_ms = now_ms.wrapping_sub(self.last_raw_change_ms);
        if pressed != self.stable && steady_ms >= self.window_ms {
            self.stable = pressed;
            self.last_stable_change_ms = now_ms;
            return if pressed {
                self.state = ButtonState::Pressed;
                ButtonEvent::Pressed
            } else {
                self.state = ButtonState::Released;
                ButtonEvent::Released
            };
        }

        self.settle();
        ButtonEvent::NoChange
    }

    fn settle(&mut self) {
        self.state = if self.stable {
            ButtonState::Held
        } else {
            ButtonState::Idle
        };
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Committed level
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Time of the last raw edge (ms)
    pub fn last_raw_change_ms(&self) -> u32 {
        self.last_raw_change_ms
    }

    /// Time of the last committed edge (ms)
    pub fn last_stable_change_ms(&self) -> u32 {
        self.last_stable_change_ms
    }
}

/// Active-low button on a pulled-up input pin
pub struct DebouncedButton<P, C> {
    pin: P,
    clock: C,
    debouncer: Debouncer,
}

impl<P: InputPin, C: Monotonic> DebouncedButton<P, C> {
    pub fn new(pin: P, clock: C, window_ms: u32) -> Self {
        Self {
            pin,
            clock,
            debouncer: Debouncer::new(window_ms),
        }
    }

    /// Read the pin once and advance the debouncer
    pub fn sample(&mut self) -> ButtonEvent {
        let pressed = self.pin.is_low();
        self.debouncer.update(pressed, self.clock.now_ms())
    }

    pub fn state(&self) -> ButtonState {
        self.debouncer.state()
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}
