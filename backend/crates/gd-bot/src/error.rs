use crate::TelegramError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use gd_archive::ArchiveError;
use gd_core::CoreError;
use gd_github::GithubError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error(transparent)]
    Telegram(#[from] TelegramError),

    #[error(transparent)]
    Github(#[from] GithubError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl BotError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BotError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type BotResult<T> = std::result::Result<T, BotError>;
