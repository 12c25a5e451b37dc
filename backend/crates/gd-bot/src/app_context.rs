use crate::{AccessGate, BotResult, Metrics, SessionStore, TelegramClient};

use std::sync::atomic::{AtomicU64, Ordering};

use gd_config::Config;
use gd_github::GithubClient;
use log::warn;

/// Everything a handler needs, built once at startup and shared
pub struct AppContext {
    pub config: Config,
    pub telegram: TelegramClient,
    pub github: GithubClient,
    pub gate: AccessGate,
    pub sessions: SessionStore,
    pub metrics: Metrics,
    upload_counter: AtomicU64,
}

impl AppContext {
    /// Build clients and state from a validated config
    pub fn from_config(config: Config) -> BotResult<Self> {
        let telegram = TelegramClient::new(
            &config.telegram.api_base,
            config.telegram.bot_token.as_deref().unwrap_or_default(),
        )?;

        if config.github.token.is_none() {
            warn!("GITHUB_TOKEN is not set; GitHub requests will be rejected");
        }
        let github = GithubClient::new(
            &config.github.api_base,
            &config.github.web_base,
            config.github.token.as_deref(),
        )?;

        let gate = AccessGate::new(config.owner_id(), config.rate_limit.cooldown());

        Ok(Self {
            config,
            telegram,
            github,
            gate,
            sessions: SessionStore::new(),
            metrics: Metrics::new(),
            upload_counter: AtomicU64::new(0),
        })
    }

    /// Successful uploads since startup
    pub fn uploads(&self) -> u64 {
        self.upload_counter.load(Ordering::Relaxed)
    }

    /// Count a successful upload and return the new total
    pub fn record_upload(&self) -> u64 {
        self.upload_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
