//! Error types for saving, loading and configuration.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures writing a save file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("No filename entered")]
    EmptyFilename,

    #[error("Could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures reading a save file that exists.
///
/// A missing file is not an error; `load_character` returns `Ok(None)`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Save file is missing the '{0}' field")]
    MissingField(&'static str),

    #[error("Field '{field}' is not an integer: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Level must be between 1 and {}", crate::constants::MAX_LEVEL)]
    InvalidLevel,
}

/// Failures reading an explicitly requested config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
