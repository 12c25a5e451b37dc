use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_EXTENSION};

use serde::Deserialize;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;
pub const MAX_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Limits applied to uploaded archives before they are downloaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub allowed_extension: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extension: String::from(DEFAULT_ALLOWED_EXTENSION),
        }
    }
}

impl UploadConfig {
    /// Cap expressed in whole MiB, for user-facing messages
    pub fn max_megabytes(&self) -> u64 {
        self.max_bytes / (1024 * 1024)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bytes == 0 || self.max_bytes > MAX_MAX_UPLOAD_BYTES {
            return Err(ConfigError::upload(format!(
                "upload.max_bytes must be 1-{}, got {}",
                MAX_MAX_UPLOAD_BYTES, self.max_bytes
            )));
        }

        if !self.allowed_extension.starts_with('.') || self.allowed_extension.len() < 2 {
            return Err(ConfigError::upload(format!(
                "upload.allowed_extension must look like '.zip', got '{}'",
                self.allowed_extension
            )));
        }

        Ok(())
    }
}
