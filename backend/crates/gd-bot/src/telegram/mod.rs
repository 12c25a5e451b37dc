mod client;
mod error;
mod types;

pub use client::TelegramClient;
pub use error::{TelegramError, TelegramResult};
pub use types::{
    Chat, Document, MessageRef, TelegramFile, TelegramMessage, TelegramUser, Update,
};
