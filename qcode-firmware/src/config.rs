//! Build-time configuration
//!
//! `build.rs` validates `qcode.toml` and writes its values out as
//! constants; this module turns them into the core's config type.

use defmt::*;
use qcode_core::QcodeConfig;

include!(concat!(env!("OUT_DIR"), "/qcode_config.rs"));

/// Configuration compiled into this image
pub fn load() -> QcodeConfig {
    let config = QcodeConfig {
        debounce_ms: DEBOUNCE_MS,
        dwell_ms: DWELL_MS,
        echo: ECHO,
    };

    match config.validate() {
        Ok(()) => {
            info!(
                "Config: {} baud, echo={}, debounce={}ms, dwell={}ms",
                BAUDRATE, config.echo, config.debounce_ms, config.dwell_ms
            );
            config
        }
        Err(e) => {
            // build.rs runs the same check, so only reachable if the two drift apart
            error!("Invalid configuration: {:?}, using defaults", e);
            QcodeConfig::default()
        }
    }
}
