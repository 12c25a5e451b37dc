//! Routing of accepted updates to the command, text and document handlers.

mod commands;
mod document;

use crate::{AppContext, BotResult, Command, GateDecision, TelegramMessage, Update};

use log::{debug, error};

/// Handle one update end to end. Failures are logged, never propagated, so
/// one bad event cannot stop the poll loop.
pub async fn dispatch(ctx: &AppContext, update: Update) {
    let Some(message) = update.message else {
        debug!("Update {} carries no message", update.update_id);
        return;
    };

    if message.document.is_none() && message.text.is_none() {
        debug!("Message {} has nothing to route", message.message_id);
        return;
    }

    match ctx.gate.check(message.sender_id()) {
        GateDecision::Accepted => {}
        GateDecision::NotOwner => {
            ctx.metrics.event_dropped("not_owner");
            return;
        }
        GateDecision::CoolingDown => {
            ctx.metrics.event_dropped("cooldown");
            return;
        }
    }

    if let Err(e) = route(ctx, &message).await {
        error!("Failed to handle message {}: {}", message.message_id, e);
    }
}

async fn route(ctx: &AppContext, message: &TelegramMessage) -> BotResult<()> {
    // Accepted events always carry a sender
    let user_id = message.sender_id().unwrap_or_default();
    let chat_id = message.chat.id;

    if let Some(document) = &message.document {
        ctx.metrics.event_accepted("document");
        return document::handle_document(ctx, user_id, chat_id, document).await;
    }

    let text = message.text.as_deref().unwrap_or_default();
    let command = Command::parse(text);
    debug!("Routing '{}' from {}", command.kind(), user_id);
    ctx.metrics.event_accepted(command.kind());

    commands::handle_command(ctx, user_id, chat_id, command).await
}
