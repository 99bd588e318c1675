use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_FILTER};
use crate::error::ConfigError;

/// User configuration, read from `config.toml` in the platform config
/// directory. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory that relative save filenames resolve against.
    pub save_dir: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Ask "Level up? (y/n)" before leveling.
    pub confirm_level_up: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            confirm_level_up: true,
        }
    }
}

impl AppConfig {
    /// Location of the default config file, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "hunter").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads the default config file.
    /// Falls back to defaults if it is missing or unparseable.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            debug!("No config directory on this platform, using defaults");
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }
        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    /// Loads a specific config file. Unlike `load`, a missing or invalid file
    /// is an error.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
