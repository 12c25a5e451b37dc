use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by the Bot API client
#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("Telegram request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Telegram API error: {description} (code: {code:?}) {location}")]
    Api {
        code: Option<i64>,
        description: String,
        location: ErrorLocation,
    },

    #[error("Telegram JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl TelegramError {
    /// Request URLs embed the bot token, so they are stripped here
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let err = err.without_url();
        TelegramError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        TelegramError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(code: Option<i64>, description: impl Into<String>) -> Self {
        TelegramError::Api {
            code,
            description: description.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TelegramError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<reqwest::Error> for TelegramError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        TelegramError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for TelegramError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        TelegramError::from_json(err)
    }
}

pub type TelegramResult<T> = std::result::Result<T, TelegramError>;
