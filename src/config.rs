//! Configuration loading

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::IntakeError;

pub use types::{AnalysisConfig, Config, OverlayConfig};

const CONFIG_DIR: &str = "symptom-intake";
const CONFIG_FILE: &str = "config.toml";

/// Default config location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location.
///
/// A missing file means defaults; an unreadable or malformed one is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, IntakeError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, IntakeError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map_err(|message| IntakeError::InvalidConfig {
        path: path.to_path_buf(),
        message,
    })
}

pub fn parse_config(contents: &str) -> Result<Config, String> {
    toml::from_str(contents).map_err(|e| e.message().to_string())
}
