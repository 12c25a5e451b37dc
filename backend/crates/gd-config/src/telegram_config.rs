use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_POLL_TIMEOUT_SECS, DEFAULT_TELEGRAM_API_BASE,
    MAX_POLL_TIMEOUT_SECS, MIN_POLL_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Chat transport settings (Telegram Bot API).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot credential; required at startup
    pub bot_token: Option<String>,
    pub api_base: String,
    /// Long-poll timeout passed to getUpdates
    pub poll_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            api_base: String::from(DEFAULT_TELEGRAM_API_BASE),
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
        }
    }
}

impl TelegramConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.bot_token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::telegram(
                    "TELEGRAM_BOT_TOKEN is not set (telegram.bot_token)",
                ));
            }
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::telegram(format!(
                "telegram.api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }

        if self.poll_timeout_secs < MIN_POLL_TIMEOUT_SECS
            || self.poll_timeout_secs > MAX_POLL_TIMEOUT_SECS
        {
            return Err(ConfigError::telegram(format!(
                "telegram.poll_timeout_secs must be {}-{}, got {}",
                MIN_POLL_TIMEOUT_SECS, MAX_POLL_TIMEOUT_SECS, self.poll_timeout_secs
            )));
        }

        Ok(())
    }
}
