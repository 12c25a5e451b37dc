use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create a telegram error
    #[track_caller]
    pub fn telegram<S: Into<String>>(message: S) -> Self {
        Self::generic("Telegram", message)
    }

    /// Create a github error
    #[track_caller]
    pub fn github<S: Into<String>>(message: S) -> Self {
        Self::generic("GitHub", message)
    }

    /// Create an owner error
    #[track_caller]
    pub fn owner<S: Into<String>>(message: S) -> Self {
        Self::generic("Owner", message)
    }

    /// Create an upload error
    #[track_caller]
    pub fn upload<S: Into<String>>(message: S) -> Self {
        Self::generic("Upload", message)
    }

    /// Create a logging error
    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::generic("Logging", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
