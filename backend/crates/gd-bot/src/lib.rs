//! Telegram front-end: receives commands and archives from the owner and
//! drives the GitHub workflows.

pub mod app_context;
pub mod command;
pub mod error;
pub mod gate;
pub mod handlers;
pub mod metrics;
pub mod poller;
pub mod replies;
pub mod session;
pub mod shutdown;
pub mod status;
pub mod telegram;
pub mod workflow;

#[cfg(test)]
mod tests;

pub use app_context::AppContext;
pub use command::{Command, TextIntent, classify_text};
pub use error::{BotError, BotResult};
pub use gate::{AccessGate, GateDecision};
pub use handlers::dispatch;
pub use metrics::Metrics;
pub use poller::{POLL_ERROR_PAUSE, poll_once, run_polling};
pub use session::{PendingUpload, SessionState, SessionStore};
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
pub use status::StatusMessage;
pub use telegram::{
    Chat, Document, MessageRef, TelegramClient, TelegramError, TelegramFile, TelegramMessage,
    TelegramResult, TelegramUser, Update,
};
pub use workflow::WorkflowOutcome;
