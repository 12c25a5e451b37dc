mod edge_cases;

use crate::{Config, OwnerConfig, TelegramConfig};

use std::env;

use tempfile::TempDir;

/// Variables read by Config::load(); cleared for every env-driven test
const MANAGED_VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "GITHUB_TOKEN",
    "OWNER_ID",
    "GD_TELEGRAM_API_BASE",
    "GD_TELEGRAM_POLL_TIMEOUT_SECS",
    "GD_GITHUB_API_BASE",
    "GD_GITHUB_WEB_BASE",
    "GD_COOLDOWN_MS",
    "GD_UPLOAD_MAX_BYTES",
    "GD_LOG_LEVEL",
    "GD_LOG_COLORED",
    "GD_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by GD_CONFIG_DIR, with every managed
/// variable cleared until the value is dropped
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_config_dir() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = MANAGED_VARS.iter().map(|k| EnvGuard::remove(k)).collect();
    guards.push(EnvGuard::set("GD_CONFIG_DIR", dir.path().to_str().unwrap()));
    TestEnv {
        dir,
        _guards: guards,
    }
}

/// A config that passes validation without touching the environment
pub(crate) fn valid_config() -> Config {
    Config {
        telegram: TelegramConfig {
            bot_token: Some("123:abc".to_string()),
            ..TelegramConfig::default()
        },
        owner: OwnerConfig { id: Some(42) },
        ..Config::default()
    }
}
