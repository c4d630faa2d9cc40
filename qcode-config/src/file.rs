//! Layout of `qcode.toml`
//!
//! ```toml
//! [serial]
//! baudrate = 115200
//! echo = true
//!
//! [button]
//! debounce_ms = 50
//!
//! [replay]
//! dwell_ms = 250
//! ```
//!
//! Every section and key is optional. Unknown sections and keys are
//! rejected so a typo cannot silently fall back to a default.

use std::fmt;
use std::ops::RangeInclusive;

use qcode_core::config::{ConfigError, QcodeConfig, MAX_DEBOUNCE_MS, MAX_DWELL_MS};
use serde::{Deserialize, Serialize};

/// Link speed used when `[serial] baudrate` is absent
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Baud rates the RP2040 UART handles reliably from the default clock
pub const BAUDRATE_RANGE: RangeInclusive<u32> = 1_200..=921_600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerialSection {
    pub baudrate: u32,
    pub echo: bool,
}

impl Default for SerialSection {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
            echo: QcodeConfig::default().echo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonSection {
    pub debounce_ms: u32,
}

impl Default for ButtonSection {
    fn default() -> Self {
        Self {
            debounce_ms: QcodeConfig::default().debounce_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplaySection {
    pub dwell_ms: u32,
}

impl Default for ReplaySection {
    fn default() -> Self {
        Self {
            dwell_ms: QcodeConfig::default().dwell_ms,
        }
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub serial: SerialSection,
    pub button: ButtonSection,
    pub replay: ReplaySection,
}

/// Why a configuration file was refused
#[derive(Debug)]
pub enum FileError {
    /// Not valid TOML, unknown key or wrong value type
    Parse(toml::de::Error),
    BaudrateOutOfRange(u32),
    /// Parsed, but the firmware would reject the values
    Rejected(ConfigError),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Parse(e) => write!(f, "{}", e),
            FileError::BaudrateOutOfRange(baud) => write!(
                f,
                "[serial] baudrate {} outside {}-{}",
                baud,
                BAUDRATE_RANGE.start(),
                BAUDRATE_RANGE.end()
            ),
            FileError::Rejected(ConfigError::ZeroDebounce) => {
                write!(f, "[button] debounce_ms must be at least 1")
            }
            FileError::Rejected(ConfigError::DebounceTooLong) => {
                write!(f, "[button] debounce_ms must be at most {}", MAX_DEBOUNCE_MS)
            }
            FileError::Rejected(ConfigError::ZeroDwell) => {
                write!(f, "[replay] dwell_ms must be at least 1")
            }
            FileError::Rejected(ConfigError::DwellTooLong) => {
                write!(f, "[replay] dwell_ms must be at most {}", MAX_DWELL_MS)
            }
        }
    }
}

impl std::error::Error for FileError {}

impl From<toml::de::Error> for FileError {
    fn from(e: toml::de::Error) -> Self {
        FileError::Parse(e)
    }
}

impl ConfigFile {
    /// Parse a document and check every value
    pub fn parse(text: &str) -> Result<Self, FileError> {
        let file: Self = toml::from_str(text)?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<(), FileError> {
        if !BAUDRATE_RANGE.contains(&self.serial.baudrate) {
            return Err(FileError::BaudrateOutOfRange(self.serial.baudrate));
        }
        self.qcode_config().validate().map_err(FileError::Rejected)
    }

    /// The runtime settings handed to the controller
    pub fn qcode_config(&self) -> QcodeConfig {
        QcodeConfig {
            debounce_ms: self.button.debounce_ms,
            dwell_ms: self.replay.dwell_ms,
            echo: self.serial.echo,
        }
    }

    /// Rust source with one constant per setting
    ///
    /// The resolved runtime settings are repeated as a TOML comment so the
    /// generated file shows exactly what the controller will run with.
    pub fn to_constants(&self) -> String {
        let core = self.qcode_config();
        let mut out = String::from("// Generated by build.rs from qcode.toml\n//\n");

        if let Ok(resolved) = toml::to_string(&core) {
            for line in resolved.lines() {
                out.push_str("// ");
                out.push_str(line);
                out.push('\n');
            }
        }

        out.push_str(&format!(
            "\npub const BAUDRATE: u32 = {};\n\
             pub const ECHO: bool = {};\n\
             pub const DEBOUNCE_MS: u32 = {};\n\
             pub const DWELL_MS: u32 = {};\n",
            self.serial.baudrate, core.echo, core.debounce_ms, core.dwell_ms
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = include_str!("../../qcode-firmware/qcode.toml");

    #[test]
    fn test_reference_file_is_valid() {
        let file = ConfigFile::parse(REFERENCE).unwrap();
        assert_eq!(file.serial.baudrate, 115_200);
        assert_eq!(file.qcode_config(), QcodeConfig::default());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = ConfigFile::parse("").unwrap();
        assert_eq!(file, ConfigFile::default());
        assert_eq!(file.serial.baudrate, DEFAULT_BAUDRATE);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let file = ConfigFile::parse("[replay]\ndwell_ms = 500\n").unwrap();
        let config = file.qcode_config();
        assert_eq!(config.dwell_ms, 500);
        assert_eq!(config.debounce_ms, QcodeConfig::default().debounce_ms);
        assert!(config.echo);
    }

    #[test]
    fn test_echo_can_be_disabled() {
        let file = ConfigFile::parse("[serial]\necho = false\n").unwrap();
        assert!(!file.qcode_config().echo);
        assert_eq!(file.serial.baudrate, DEFAULT_BAUDRATE);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ConfigFile::parse("[button]\ndebounce = 20\n").unwrap_err();
        assert!(matches!(err, FileError::Parse(_)));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = ConfigFile::parse("[display]\ndigits = 4\n").unwrap_err();
        assert!(matches!(err, FileError::Parse(_)));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = ConfigFile::parse("[serial]\necho = \"yes\"\n").unwrap_err();
        assert!(matches!(err, FileError::Parse(_)));

        let err = ConfigFile::parse("[replay]\ndwell_ms = -5\n").unwrap_err();
        assert!(matches!(err, FileError::Parse(_)));
    }

    #[test]
    fn test_baudrate_range() {
        let err = ConfigFile::parse("[serial]\nbaudrate = 300\n").unwrap_err();
        assert!(matches!(err, FileError::BaudrateOutOfRange(300)));

        assert!(ConfigFile::parse("[serial]\nbaudrate = 921600\n").is_ok());
    }

    #[test]
    fn test_core_limits_are_enforced() {
        let cases = [
            ("[button]\ndebounce_ms = 0\n", ConfigError::ZeroDebounce),
            ("[button]\ndebounce_ms = 1001\n", ConfigError::DebounceTooLong),
            ("[replay]\ndwell_ms = 0\n", ConfigError::ZeroDwell),
            ("[replay]\ndwell_ms = 2001\n", ConfigError::DwellTooLong),
        ];
        for (text, expected) in cases {
            match ConfigFile::parse(text) {
                Err(FileError::Rejected(e)) => assert_eq!(e, expected, "{}", text),
                other => panic!("{}: unexpected {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_error_messages_name_the_key() {
        let err = ConfigFile::parse("[replay]\ndwell_ms = 0\n").unwrap_err();
        assert_eq!(err.to_string(), "[replay] dwell_ms must be at least 1");

        let err = ConfigFile::parse("[serial]\nbaudrate = 300\n").unwrap_err();
        assert!(err.to_string().starts_with("[serial] baudrate 300"));
    }

    #[test]
    fn test_constants_source() {
        let file = ConfigFile::parse("[serial]\nbaudrate = 9600\necho = false\n[replay]\ndwell_ms = 400\n")
            .unwrap();
        let source = file.to_constants();

        assert!(source.contains("pub const BAUDRATE: u32 = 9600;"));
        assert!(source.contains("pub const ECHO: bool = false;"));
        assert!(source.contains("pub const DEBOUNCE_MS: u32 = 50;"));
        assert!(source.contains("pub const DWELL_MS: u32 = 400;"));
        assert!(source.contains("// dwell_ms = 400"));
    }

    #[test]
    fn test_qcode_config_toml_round_trip() {
        let config = QcodeConfig {
            debounce_ms: 20,
            dwell_ms: 750,
            echo: false,
        };
        let text = toml::to_string(&config).unwrap();
        let back: QcodeConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_qcode_config_missing_fields_default() {
        let config: QcodeConfig = toml::from_str("echo = false").unwrap();
        assert_eq!(config.dwell_ms, QcodeConfig::default().dwell_ms);
        assert_eq!(config.debounce_ms, QcodeConfig::default().debounce_ms);
        assert!(!config.echo);
    }
}
