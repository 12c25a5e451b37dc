use crate::{ConfigError, ConfigErrorResult, DEFAULT_GITHUB_API_BASE, DEFAULT_GITHUB_WEB_BASE};

use serde::Deserialize;

/// Remote hosting settings. One credential is shared by every operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub api_base: String,
    /// Base used to build repository links shown to the owner
    pub web_base: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: String::from(DEFAULT_GITHUB_API_BASE),
            web_base: String::from(DEFAULT_GITHUB_WEB_BASE),
        }
    }
}

impl GithubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (field, value) in [("api_base", &self.api_base), ("web_base", &self.web_base)] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::github(format!(
                    "github.{} must be an http(s) URL, got '{}'",
                    field, value
                )));
            }
        }

        if self.token.as_deref().is_none_or(|t| t.trim().is_empty()) {
            log::warn!("GITHUB_TOKEN is not set; every repository operation will fail");
        }

        Ok(())
    }
}
