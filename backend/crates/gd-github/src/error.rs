use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while talking to the GitHub REST API
#[derive(Error, Debug)]
pub enum GithubError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Repository '{name}' already exists {location}")]
    AlreadyExists { name: String, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
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

    #[error("Invalid GitHub base URL '{url}' {location}")]
    InvalidBaseUrl { url: String, location: ErrorLocation },

    #[error("Could not resolve the authenticated GitHub login {location}")]
    MissingLogin { location: ErrorLocation },
}

impl GithubError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GithubError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GithubError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        GithubError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_exists(name: impl Into<String>) -> Self {
        GithubError::AlreadyExists {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GithubError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn invalid_base_url(url: impl Into<String>) -> Self {
        GithubError::InvalidBaseUrl {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_login() -> Self {
        GithubError::MissingLogin {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API rejection, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            GithubError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GithubError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GithubError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GithubError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GithubError::from_json(err)
    }
}

pub type GithubResult<T> = std::result::Result<T, GithubError>;
