use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    GithubConfig, LoggingConfig, OwnerConfig, RateLimitConfig, TelegramConfig, UploadConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub github: GithubConfig,
    pub owner: OwnerConfig,
    pub rate_limit: RateLimitConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read `.env` into the process environment if present
    /// 2. Check for GD_CONFIG_DIR env var, else use ./.gitdrop/
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides (credentials and GD_*)
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Development convenience; a missing .env is not an error
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GD_CONFIG_DIR env var > ./.gitdrop/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.telegram.validate()?;
        self.owner.validate()?;
        self.github.validate()?;
        self.rate_limit.validate()?;
        self.upload.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Owner identity; only meaningful after validate() succeeded.
    pub fn owner_id(&self) -> u64 {
        self.owner.id.unwrap_or_default()
    }

    /// Absolute path of the log file, creating its directory, when file
    /// logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(ref filename) = self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        std::fs::create_dir_all(&log_dir).map_err(|e| ConfigError::Io {
            path: log_dir.clone(),
            source: e,
        })?;

        Ok(Some(log_dir.join(filename)))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  telegram: {} (token {}, poll timeout {}s)",
            self.telegram.api_base,
            present(&self.telegram.bot_token),
            self.telegram.poll_timeout_secs
        );
        info!(
            "  github: {} (token {})",
            self.github.api_base,
            present(&self.github.token)
        );
        info!(
            "  owner: {}",
            if self.owner.id.is_some() {
                "configured"
            } else {
                "missing"
            }
        );
        info!("  rate_limit: cooldown={}ms", self.rate_limit.cooldown_ms);
        info!(
            "  upload: max {} bytes, extension {}",
            self.upload.max_bytes, self.upload.allowed_extension
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Credentials
        Self::apply_env_option_string("TELEGRAM_BOT_TOKEN", &mut self.telegram.bot_token);
        Self::apply_env_option_string("GITHUB_TOKEN", &mut self.github.token);
        Self::apply_env_option_parse("OWNER_ID", &mut self.owner.id);

        // Telegram
        Self::apply_env_string("GD_TELEGRAM_API_BASE", &mut self.telegram.api_base);
        Self::apply_env_parse(
            "GD_TELEGRAM_POLL_TIMEOUT_SECS",
            &mut self.telegram.poll_timeout_secs,
        );

        // GitHub
        Self::apply_env_string("GD_GITHUB_API_BASE", &mut self.github.api_base);
        Self::apply_env_string("GD_GITHUB_WEB_BASE", &mut self.github.web_base);

        // Rate limit
        Self::apply_env_parse("GD_COOLDOWN_MS", &mut self.rate_limit.cooldown_ms);

        // Upload
        Self::apply_env_parse("GD_UPLOAD_MAX_BYTES", &mut self.upload.max_bytes);

        // Logging
        Self::apply_env_parse("GD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.trim().parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<T> values.
    /// A value that does not parse clears the target so validation reports it.
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val.trim().parse().ok();
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn present(value: &Option<String>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "set",
        _ => "missing",
    }
}
