//! Build script for qcode-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates qcode.toml at compile time
//! - Emits the validated values as constants for `src/config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use qcode_config::{report, ConfigFile, FileError};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    setup_linker(&out_dir);
    let config = validate_config();
    fs::write(out_dir.join("qcode_config.rs"), config.to_constants()).unwrap();
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate qcode.toml
fn validate_config() -> ConfigFile {
    println!("cargo:rerun-if-changed=qcode.toml");

    let config_path = Path::new("qcode.toml");

    if !config_path.exists() {
        panic!(
            "{}",
            report::boxed(
                "qcode.toml not found!",
                "The firmware requires a qcode.toml configuration file.\n\
                 Please create one in the qcode-firmware directory."
            )
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!(
            "{}",
            report::boxed("Failed to read qcode.toml", &e.to_string())
        ),
    };

    let config = match ConfigFile::parse(&content) {
        Ok(config) => config,
        Err(e @ FileError::Parse(_)) => panic!(
            "{}",
            report::boxed("Invalid TOML in qcode.toml", &e.to_string())
        ),
        Err(e) => panic!(
            "{}",
            report::boxed("Invalid configuration in qcode.toml", &e.to_string())
        ),
    };

    println!(
        "cargo:warning=qcode.toml validated: {} baud, echo {}, debounce {} ms, dwell {} ms",
        config.serial.baudrate,
        config.serial.echo,
        config.button.debounce_ms,
        config.replay.dwell_ms
    );
    config
}
