//! Embassy async tasks
//!
//! The refresh task runs on a higher-priority interrupt executor so the
//! display keeps multiplexing while the control loop blocks in replay.

pub mod control;
pub mod refresh;

pub use control::control_task;
pub use refresh::{refresh_task, Display};
