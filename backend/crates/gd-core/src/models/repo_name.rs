use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;
use std::ops::Deref;
use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_REPO_NAME_LENGTH: usize = 100;

/// A repository name accepted by the hosting API.
///
/// Allowed characters are ASCII letters, digits, `.`, `_` and `-`. The name
/// may not start with `-` and may not be `.` or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        let caller = Location::caller();
        let invalid = |reason: &'static str| CoreError::InvalidRepoName {
            value: value.to_string(),
            reason,
            location: ErrorLocation::from(caller),
        };

        if value.is_empty() {
            return Err(invalid("name is empty"));
        }
        if value.len() > MAX_REPO_NAME_LENGTH {
            return Err(invalid("name is longer than 100 characters"));
        }
        if value == "." || value == ".." {
            return Err(invalid("name is reserved"));
        }
        if value.starts_with('-') {
            return Err(invalid("name cannot start with '-'"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(invalid("only letters, digits, '.', '_' and '-' are allowed"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for RepoName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the project name from an uploaded archive's file name by dropping
/// the extension (compared case-insensitively). Names without the extension
/// are returned unchanged.
pub fn project_name_from_file_name<'a>(file_name: &'a str, extension: &str) -> &'a str {
    let split = file_name.len().saturating_sub(extension.len());
    match (file_name.get(..split), file_name.get(split..)) {
        (Some(stem), Some(suffix)) if suffix.eq_ignore_ascii_case(extension) => stem,
        _ => file_name,
    }
}
