use crate::{GithubClient, GithubError, GithubResult};

use std::path::{Path, PathBuf};

use log::{error, info};
use walkdir::WalkDir;

/// Outcome of [`upload_directory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadReport {
    pub total: usize,
    pub uploaded: usize,
    pub failed: usize,
}

impl UploadReport {
    /// At least one file made it to the remote
    pub fn is_success(&self) -> bool {
        self.uploaded > 0
    }
}

/// Repository path of `file` relative to `root`, always `/`-separated.
/// Returns `None` when `file` is not under `root` or is not valid UTF-8.
pub fn repo_path(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Upload every regular file below `root` into `repo`, sequentially and in
/// path order. Individual failures are logged and counted; the walk itself
/// failing is an error.
pub async fn upload_directory(
    client: &GithubClient,
    repo: &str,
    root: &Path,
) -> GithubResult<UploadReport> {
    // Resolve identity once so a bad token fails fast instead of per file
    client.current_login().await?;

    let files = collect_files(root)?;
    let mut report = UploadReport {
        total: files.len(),
        ..UploadReport::default()
    };

    for file in files {
        let Some(path) = repo_path(root, &file) else {
            error!("Skipping non UTF-8 path {}", file.display());
            report.failed += 1;
            continue;
        };

        let bytes = match tokio::fs::read(&file).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to read {}: {}", file.display(), e);
                report.failed += 1;
                continue;
            }
        };

        match client
            .put_file(repo, &path, &bytes, &format!("Add {}", path))
            .await
        {
            Ok(()) => {
                info!("Uploaded: {}", path);
                report.uploaded += 1;
            }
            Err(e) => {
                error!("Failed to upload {}: {}", path, e);
                report.failed += 1;
            }
        }
    }

    info!(
        "Upload complete: {}/{} files uploaded to '{}'",
        report.uploaded, report.total, repo
    );
    Ok(report)
}

fn collect_files(root: &Path) -> GithubResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
            GithubError::io(path, e.into())
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
