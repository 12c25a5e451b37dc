//! Stop signal for the poll loop.
//!
//! Backed by a `watch` channel: the flag only ever goes from `false` to
//! `true`, and a guard taken after the signal still sees it.

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

#[derive(Clone)]
pub struct ShutdownCoordinator {
    stop_tx: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stop_tx, _) = watch::channel(false);
        Self {
            stop_tx: Arc::new(stop_tx),
        }
    }

    /// Ask the bot to stop after the event in flight
    pub fn shutdown(&self) {
        info!("Shutdown requested, bot will stop after the current event");
        self.stop_tx.send_replace(true);
    }

    pub fn subscribe_guard(&self) -> ShutdownGuard {
        ShutdownGuard {
            stop_rx: self.stop_tx.subscribe(),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Held by the poll loop
pub struct ShutdownGuard {
    stop_rx: watch::Receiver<bool>,
}

impl ShutdownGuard {
    pub fn is_shutdown(&self) -> bool {
        *self.stop_rx.borrow()
    }

    /// Resolve once shutdown was requested, or the coordinator is gone
    pub async fn wait(&mut self) {
        let _ = self.stop_rx.wait_for(|stopped| *stopped).await;
    }
}
