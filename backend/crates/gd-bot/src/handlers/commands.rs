use crate::{
    AppContext, BotResult, Command, PendingUpload, SessionState, StatusMessage, TextIntent,
    classify_text, replies,
};

use gd_core::DescriptionMode;
use log::{error, info};

pub(super) async fn handle_command(
    ctx: &AppContext,
    user_id: u64,
    chat_id: i64,
    command: Command,
) -> BotResult<()> {
    match command {
        Command::Start => reply(ctx, chat_id, replies::START).await,
        Command::Help => reply(ctx, chat_id, replies::HELP).await,
        Command::Upload { mode } => arm_upload(ctx, user_id, chat_id, mode).await,
        Command::UpdateRepo { name: None, .. } => {
            reset_session(ctx, user_id).await;
            reply(ctx, chat_id, &replies::usage("upd_repo")).await
        }
        Command::UpdateRepo {
            name: Some(name),
            mode,
        } => arm_refresh(ctx, user_id, chat_id, name, mode).await,
        Command::Info => repository_info(ctx, chat_id).await,
        Command::Delete { name: None } => reply(ctx, chat_id, &replies::usage("del")).await,
        Command::Delete { name: Some(name) } => delete_repository(ctx, chat_id, &name).await,
        Command::MakePrivate { name: None } => reply(ctx, chat_id, &replies::usage("priv")).await,
        Command::MakePrivate { name: Some(name) } => {
            change_visibility(ctx, chat_id, &name, true).await
        }
        Command::MakePublic { name: None } => reply(ctx, chat_id, &replies::usage("pblc")).await,
        Command::MakePublic { name: Some(name) } => {
            change_visibility(ctx, chat_id, &name, false).await
        }
        Command::Inspect { name: None } => reply(ctx, chat_id, &replies::usage("inp")).await,
        Command::Inspect { name: Some(name) } => inspect_repository(ctx, chat_id, &name).await,
        Command::Unknown(keyword) => {
            info!("Unknown command /{}", keyword);
            reply(ctx, chat_id, replies::UNKNOWN_COMMAND).await
        }
        Command::Text(text) => {
            let answer = match classify_text(&text) {
                TextIntent::HelpHint => replies::HELP_HINT,
                TextIntent::UploadHint => replies::UPLOAD_HINT,
                TextIntent::Fallback => replies::FALLBACK,
            };
            reply(ctx, chat_id, answer).await
        }
    }
}

async fn reply(ctx: &AppContext, chat_id: i64, text: &str) -> BotResult<()> {
    ctx.telegram.send_message(chat_id, text).await?;
    Ok(())
}

/// A new /upload or /upd_repo replaces whatever archive was still expected
async fn reset_session(ctx: &AppContext, user_id: u64) {
    if let SessionState::AwaitingArchive(previous) = ctx.sessions.state(user_id).await {
        info!(
            "Dropping pending {:?} for {}",
            previous.operation(),
            user_id
        );
        ctx.sessions.clear(user_id).await;
    }
}

async fn arm_upload(
    ctx: &AppContext,
    user_id: u64,
    chat_id: i64,
    mode: DescriptionMode,
) -> BotResult<()> {
    reset_session(ctx, user_id).await;
    ctx.sessions
        .arm(user_id, PendingUpload::Create { mode })
        .await;
    info!("Awaiting archive from {} (mode: {})", user_id, mode.label());

    let upload = &ctx.config.upload;
    reply(
        ctx,
        chat_id,
        &replies::upload_armed(mode, upload.max_megabytes(), &upload.allowed_extension),
    )
    .await
}

/// The repository is checked up front so the owner does not send an
/// archive for a name that will fail later.
async fn arm_refresh(
    ctx: &AppContext,
    user_id: u64,
    chat_id: i64,
    name: String,
    mode: DescriptionMode,
) -> BotResult<()> {
    reset_session(ctx, user_id).await;

    let status = StatusMessage::send(&ctx.telegram, chat_id, &replies::checking_repository(&name))
        .await?;

    match ctx.github.get_repository(&name).await {
        Ok(Some(_)) => {
            let text = replies::refresh_armed(&name, mode);
            ctx.sessions
                .arm(user_id, PendingUpload::Refresh { name, mode })
                .await;
            status.update(&text).await;
        }
        Ok(None) => status.update(&replies::repository_not_found(&name)).await,
        Err(e) => {
            error!("Repository lookup for '{}' failed: {}", name, e);
            status.update(&replies::lookup_failed(&name)).await;
        }
    }

    Ok(())
}

async fn repository_info(ctx: &AppContext, chat_id: i64) -> BotResult<()> {
    let text = match ctx.github.list_repositories().await {
        Ok(repos) => replies::repository_overview(&repos, ctx.uploads()),
        Err(e) => {
            error!("Listing repositories failed: {}", e);
            replies::LIST_FAILED.to_string()
        }
    };
    reply(ctx, chat_id, &text).await
}

async fn delete_repository(ctx: &AppContext, chat_id: i64, name: &str) -> BotResult<()> {
    let status = StatusMessage::send(&ctx.telegram, chat_id, &replies::deleting(name)).await?;

    match ctx.github.delete_repository(name).await {
        Ok(()) => {
            info!("Deleted repository '{}'", name);
            status.update(&replies::deleted(name)).await;
        }
        Err(e) => {
            error!("Deleting '{}' failed: {}", name, e);
            status.update(&replies::delete_failed(name)).await;
        }
    }

    Ok(())
}

async fn change_visibility(
    ctx: &AppContext,
    chat_id: i64,
    name: &str,
    private: bool,
) -> BotResult<()> {
    let status = StatusMessage::send(
        &ctx.telegram,
        chat_id,
        &replies::changing_visibility(name, private),
    )
    .await?;

    let text = match ctx.github.get_repository(name).await {
        Ok(None) => replies::repository_not_found(name),
        Ok(Some(_)) => match ctx.github.set_visibility(name, private).await {
            Ok(()) => replies::visibility_changed(name, private),
            Err(e) => {
                error!("Changing visibility of '{}' failed: {}", name, e);
                replies::visibility_failed(name)
            }
        },
        Err(e) => {
            error!("Repository lookup for '{}' failed: {}", name, e);
            replies::lookup_failed(name)
        }
    };
    status.update(&text).await;

    Ok(())
}

async fn inspect_repository(ctx: &AppContext, chat_id: i64, name: &str) -> BotResult<()> {
    let status =
        StatusMessage::send(&ctx.telegram, chat_id, &replies::fetching_details(name)).await?;

    let text = match ctx.github.get_repository(name).await {
        Ok(Some(detail)) => replies::repository_details(&detail),
        Ok(None) => replies::repository_details_missing(name),
        Err(e) => {
            error!("Repository lookup for '{}' failed: {}", name, e);
            replies::lookup_failed(name)
        }
    };
    status.update(&text).await;

    Ok(())
}
