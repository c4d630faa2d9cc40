//! Build-time configuration for the POST code firmware
//!
//! `qcode.toml` is read on the host by the firmware's build script. This
//! crate owns its layout, the range checks and the boxed reports printed
//! when a build is refused. The firmware only ever sees the generated
//! constants.

pub mod file;
pub mod report;

pub use file::{ButtonSection, ConfigFile, FileError, ReplaySection, SerialSection};
