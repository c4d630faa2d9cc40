//! State shared between the refresh interrupt and the control loop

use qcode_core::config::DIGIT_COUNT;
use qcode_core::DisplayState;

/// What the display should show
///
/// Written only by the control loop, read by the refresh task.
pub static DISPLAY_STATE: DisplayState<DIGIT_COUNT> = DisplayState::new();
