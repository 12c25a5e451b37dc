use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// The single chat identity allowed to drive the bot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    pub id: Option<u64>,
}

impl OwnerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.id.is_none() {
            return Err(ConfigError::owner(
                "OWNER_ID is not set or is not a number (owner.id)",
            ));
        }
        Ok(())
    }
}
