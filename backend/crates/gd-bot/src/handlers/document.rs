use crate::{
    AppContext, BotResult, Document, PendingUpload, SessionState, WorkflowOutcome, replies,
    workflow,
};

use gd_archive::{ArchiveError, validate_upload};
use gd_core::{CoreError, RepoName, project_name_from_file_name};
use log::{info, warn};

/// An archive arrived. The pending session is consumed whatever happens
/// next, so a rejected file needs a fresh /upload or /upd_repo.
pub(super) async fn handle_document(
    ctx: &AppContext,
    user_id: u64,
    chat_id: i64,
    document: &Document,
) -> BotResult<()> {
    let SessionState::AwaitingArchive(pending) = ctx.sessions.take(user_id).await else {
        ctx.telegram
            .send_message(chat_id, replies::NO_PENDING_UPLOAD)
            .await?;
        return Ok(());
    };

    let upload = &ctx.config.upload;
    let file_name = document.file_name.as_deref().unwrap_or_default();

    if let Err(e) = validate_upload(file_name, document.file_size, upload) {
        warn!("Rejected document '{}': {}", file_name, e);
        let text = match e {
            ArchiveError::TooLarge { .. } => replies::file_too_large(upload.max_megabytes()),
            _ => replies::unsupported_file(&upload.allowed_extension),
        };
        ctx.telegram.send_message(chat_id, &text).await?;
        return Ok(());
    }

    let outcome = match pending {
        PendingUpload::Create { mode } => {
            let stem = project_name_from_file_name(file_name, &upload.allowed_extension);
            let name = match RepoName::parse(stem) {
                Ok(name) => name,
                Err(CoreError::InvalidRepoName { value, reason, .. }) => {
                    warn!("Archive '{}' does not give a usable name", file_name);
                    ctx.telegram
                        .send_message(chat_id, &replies::invalid_project_name(&value, reason))
                        .await?;
                    return Ok(());
                }
            };
            workflow::run_create(ctx, chat_id, document, name.as_str(), mode).await?
        }
        PendingUpload::Refresh { name, mode } => {
            workflow::run_refresh(ctx, chat_id, document, &name, mode).await?
        }
    };

    if let WorkflowOutcome::Completed { url } = &outcome {
        info!("Workflow finished: {}", url);
    }

    Ok(())
}
