use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Cooldown constraints
pub const MIN_COOLDOWN_MS: u64 = 1;
pub const MAX_COOLDOWN_MS: u64 = 3_600_000;
pub const DEFAULT_COOLDOWN_MS: u64 = 2_000;

/// Minimum spacing between two accepted events from the same caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub cooldown_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl RateLimitConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cooldown_ms < MIN_COOLDOWN_MS || self.cooldown_ms > MAX_COOLDOWN_MS {
            return Err(ConfigError::config(format!(
                "rate_limit.cooldown_ms must be {}-{}, got {}",
                MIN_COOLDOWN_MS, MAX_COOLDOWN_MS, self.cooldown_ms
            )));
        }

        Ok(())
    }
}
