mod config;
mod error;
mod github_config;
mod log_level;
mod logging_config;
mod owner_config;
mod rate_limit_config;
mod telegram_config;
mod upload_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use github_config::GithubConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use owner_config::OwnerConfig;
pub use rate_limit_config::{
    DEFAULT_COOLDOWN_MS, MAX_COOLDOWN_MS, MIN_COOLDOWN_MS, RateLimitConfig,
};
pub use telegram_config::TelegramConfig;
pub use upload_config::{DEFAULT_MAX_UPLOAD_BYTES, MAX_MAX_UPLOAD_BYTES, UploadConfig};

const CONFIG_DIR_ENV: &str = "GD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".gitdrop";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;
const MIN_POLL_TIMEOUT_SECS: u64 = 1;
const MAX_POLL_TIMEOUT_SECS: u64 = 300;

const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const DEFAULT_GITHUB_WEB_BASE: &str = "https://github.com";

const DEFAULT_ALLOWED_EXTENSION: &str = ".zip";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
