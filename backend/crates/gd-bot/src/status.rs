use crate::{MessageRef, TelegramClient, TelegramResult};

use log::warn;

/// A single reply that is edited in place as an operation progresses.
pub struct StatusMessage<'a> {
    client: &'a TelegramClient,
    target: MessageRef,
}

impl<'a> StatusMessage<'a> {
    /// Send the first version of the status line
    pub async fn send(client: &'a TelegramClient, chat_id: i64, text: &str) -> TelegramResult<Self> {
        let target = client.send_message(chat_id, text).await?;
        Ok(Self { client, target })
    }

    /// Replace the text. A failed edit is logged; the operation carries on.
    pub async fn update(&self, text: &str) {
        if let Err(e) = self.client.edit_message_text(self.target, text).await {
            warn!("Could not update status message: {}", e);
        }
    }
}

/// Checklist-style progress text for a running workflow
#[derive(Debug, Clone)]
pub struct Progress {
    title: String,
    done: Vec<String>,
}

impl Progress {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Vec::new(),
        }
    }

    pub fn complete(&mut self, step: impl Into<String>) {
        self.done.push(step.into());
    }

    pub fn render(&self, current: &str) -> String {
        let mut text = format!("🔄 {}\n\n", self.title);
        for step in &self.done {
            text.push_str(&format!("✅ {}\n", step));
        }
        text.push_str(&format!("⏳ {}", current));
        text
    }
}
