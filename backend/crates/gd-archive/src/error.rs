use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Unsupported file '{file_name}': only {expected} archives are accepted {location}")]
    UnsupportedType {
        file_name: String,
        expected: String,
        location: ErrorLocation,
    },

    #[error("File is too large: {size} bytes exceeds the {max} byte limit {location}")]
    TooLarge {
        size: u64,
        max: u64,
        location: ErrorLocation,
    },

    #[error("Invalid archive: {message} {location}")]
    InvalidArchive {
        message: String,
        location: ErrorLocation,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("I/O error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl ArchiveError {
    #[track_caller]
    pub fn unsupported_type(file_name: impl Into<String>, expected: impl Into<String>) -> Self {
        ArchiveError::UnsupportedType {
            file_name: file_name.into(),
            expected: expected.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_large(size: u64, max: u64) -> Self {
        ArchiveError::TooLarge {
            size,
            max,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_archive(source: zip::result::ZipError) -> Self {
        ArchiveError::InvalidArchive {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;
