//! The two archive workflows. Each step either advances the status line
//! or ends the workflow with a single final edit.

use crate::status::Progress;
use crate::{AppContext, BotError, BotResult, Document, StatusMessage, TelegramError, replies};

use std::path::Path;

use gd_archive::{ArchiveError, StagedProject, StagingArea, stage_archive};
use gd_core::{DescriptionMode, Operation};
use gd_github::{GithubError, clear_repository, upload_directory};
use gd_readme::{README_FILE_NAME, ensure_readme};
use log::{error, info, warn};

const DESCRIPTION_PREFIX: &str = "Project uploaded via Telegram Bot on";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    Completed { url: String },
    /// The owner was already told why
    Failed,
}

/// Create a repository from the archive and upload its content
pub async fn run_create(
    ctx: &AppContext,
    chat_id: i64,
    document: &Document,
    name: &str,
    mode: DescriptionMode,
) -> BotResult<WorkflowOutcome> {
    let mut progress = Progress::new(replies::create_title(name, mode));
    let status =
        StatusMessage::send(&ctx.telegram, chat_id, &progress.render("Downloading file...")).await?;

    let outcome = match create_steps(ctx, &status, &mut progress, document, name, mode).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Upload of '{}' failed: {}", name, e);
            status
                .update(&replies::workflow_fault("upload", &e.to_string()))
                .await;
            WorkflowOutcome::Failed
        }
    };

    match outcome {
        WorkflowOutcome::Completed { .. } => ctx.metrics.upload_completed(),
        WorkflowOutcome::Failed => ctx.metrics.workflow_failed("upload"),
    }
    Ok(outcome)
}

/// Replace the content of an existing repository with the archive
pub async fn run_refresh(
    ctx: &AppContext,
    chat_id: i64,
    document: &Document,
    name: &str,
    mode: DescriptionMode,
) -> BotResult<WorkflowOutcome> {
    let mut progress = Progress::new(replies::refresh_title(name));
    let status =
        StatusMessage::send(&ctx.telegram, chat_id, &progress.render("Downloading file...")).await?;

    let outcome = match refresh_steps(ctx, &status, &mut progress, document, name, mode).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Refresh of '{}' failed: {}", name, e);
            status
                .update(&replies::workflow_fault("update", &e.to_string()))
                .await;
            WorkflowOutcome::Failed
        }
    };

    match outcome {
        WorkflowOutcome::Completed { .. } => ctx.metrics.refresh_completed(),
        WorkflowOutcome::Failed => ctx.metrics.workflow_failed("refresh"),
    }
    Ok(outcome)
}

async fn create_steps(
    ctx: &AppContext,
    status: &StatusMessage<'_>,
    progress: &mut Progress,
    document: &Document,
    name: &str,
    mode: DescriptionMode,
) -> BotResult<WorkflowOutcome> {
    let area = StagingArea::new(document.file_name.as_deref().unwrap_or_default())?;
    let project = fetch_and_stage(ctx, status, progress, document, &area).await?;

    status
        .update(&progress.render("Creating GitHub repository..."))
        .await;
    let description = format!(
        "{} {}",
        DESCRIPTION_PREFIX,
        chrono::Local::now().format(TIMESTAMP_FORMAT)
    );
    match ctx.github.create_repository(name, &description).await {
        Ok(()) => progress.complete("Repository created"),
        Err(GithubError::AlreadyExists { .. }) => {
            warn!("Repository '{}' already exists", name);
            status.update(&replies::already_exists(name)).await;
            return Ok(WorkflowOutcome::Failed);
        }
        Err(e @ GithubError::Api { .. }) => {
            error!("Creating '{}' failed: {}", name, e);
            status.update(&replies::create_failed(name)).await;
            return Ok(WorkflowOutcome::Failed);
        }
        Err(e) => return Err(e.into()),
    }

    prepare_readme(status, progress, &project, name, mode, Operation::Create).await?;

    status.update(&progress.render("Uploading files...")).await;
    let report = upload_directory(&ctx.github, name, &project.root).await?;
    info!(
        "Uploaded {}/{} files to '{}'",
        report.uploaded, report.total, name
    );
    if !report.is_success() {
        status
            .update(&replies::upload_failed_after_create(name))
            .await;
        return Ok(WorkflowOutcome::Failed);
    }

    let total = ctx.record_upload();
    let url = ctx.github.repository_url(name).await?;
    status
        .update(&replies::upload_succeeded(name, &url, mode, total))
        .await;

    Ok(WorkflowOutcome::Completed { url })
}

async fn refresh_steps(
    ctx: &AppContext,
    status: &StatusMessage<'_>,
    progress: &mut Progress,
    document: &Document,
    name: &str,
    mode: DescriptionMode,
) -> BotResult<WorkflowOutcome> {
    let area = StagingArea::new(document.file_name.as_deref().unwrap_or_default())?;
    let project = fetch_and_stage(ctx, status, progress, document, &area).await?;

    status
        .update(&progress.render("Deleting old repository content..."))
        .await;
    let report = match clear_repository(&ctx.github, name).await {
        Ok(report) => report,
        Err(e) => {
            error!("Listing content of '{}' failed: {}", name, e);
            status.update(&replies::clear_failed(name, 0, 0)).await;
            return Ok(WorkflowOutcome::Failed);
        }
    };
    if let Some(failure) = &report.failure {
        error!(
            "Clearing '{}' stopped at {}: {}",
            name, failure.path, failure.error
        );
        status
            .update(&replies::clear_failed(name, report.deleted, report.discovered))
            .await;
        return Ok(WorkflowOutcome::Failed);
    }
    progress.complete(format!("Old content deleted ({} files)", report.deleted));

    prepare_readme(status, progress, &project, name, mode, Operation::Refresh).await?;

    status.update(&progress.render("Uploading new files...")).await;
    let upload = upload_directory(&ctx.github, name, &project.root).await?;
    info!(
        "Uploaded {}/{} files to '{}'",
        upload.uploaded, upload.total, name
    );
    if !upload.is_success() {
        status.update(&replies::refresh_upload_failed(name)).await;
        return Ok(WorkflowOutcome::Failed);
    }

    let url = ctx.github.repository_url(name).await?;
    status
        .update(&replies::refresh_succeeded(name, &url, mode))
        .await;

    Ok(WorkflowOutcome::Completed { url })
}

/// Download the archive into the staging area and extract it
async fn fetch_and_stage(
    ctx: &AppContext,
    status: &StatusMessage<'_>,
    progress: &mut Progress,
    document: &Document,
    area: &StagingArea,
) -> BotResult<StagedProject> {
    let size = download(ctx, document, area.archive_path()).await?;
    let max = ctx.config.upload.max_bytes;
    if size > max {
        return Err(ArchiveError::too_large(size, max).into());
    }
    progress.complete(format!("File downloaded ({} bytes)", size));

    status.update(&progress.render("Extracting archive...")).await;
    let project = stage_archive(area)?;
    progress.complete(format!("Archive extracted ({} entries)", project.entries));

    Ok(project)
}

async fn download(ctx: &AppContext, document: &Document, dest: &Path) -> BotResult<u64> {
    let file = ctx.telegram.get_file(&document.file_id).await?;
    let Some(file_path) = file.file_path else {
        return Err(TelegramError::api(None, "getFile returned no file_path").into());
    };

    Ok(ctx.telegram.download_file(&file_path, dest).await?)
}

async fn prepare_readme(
    status: &StatusMessage<'_>,
    progress: &mut Progress,
    project: &StagedProject,
    name: &str,
    mode: DescriptionMode,
    operation: Operation,
) -> BotResult<()> {
    status.update(&progress.render("Preparing README.md...")).await;
    ensure_readme(&project.root, name, mode, operation)
        .map_err(|e| BotError::io(project.root.join(README_FILE_NAME), e))?;
    progress.complete("README.md ready");
    Ok(())
}
