use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid repository name '{value}': {reason} {location}")]
    InvalidRepoName {
        value: String,
        reason: &'static str,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
