use crate::{GithubClient, GithubError, GithubResult};

use log::{error, info};

/// A remote file scheduled for deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub path: String,
    pub sha: String,
}

/// The delete call that stopped a clear
#[derive(Debug)]
pub struct DeleteFailure {
    pub path: String,
    pub error: GithubError,
}

/// Outcome of [`clear_repository`]
#[derive(Debug)]
pub struct ClearReport {
    pub discovered: usize,
    pub deleted: usize,
    pub failure: Option<DeleteFailure>,
}

impl ClearReport {
    /// Every discovered file was deleted
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && self.deleted == self.discovered
    }
}

/// Depth-first listing of every non-directory entry under the repository root.
///
/// Symlinks and submodules are returned alongside plain files since the
/// contents API deletes them the same way. Any lookup failure other than a
/// missing path aborts the whole traversal.
pub async fn collect_remote_files(
    client: &GithubClient,
    repo: &str,
) -> GithubResult<Vec<RemoteFile>> {
    let mut files = Vec::new();
    let mut pending = vec![String::new()];

    while let Some(dir) = pending.pop() {
        let entries = client.get_contents(repo, &dir).await?;

        let mut subdirs = Vec::new();
        for entry in entries {
            if entry.is_dir() {
                subdirs.push(entry.path);
            } else {
                files.push(RemoteFile {
                    path: entry.path,
                    sha: entry.sha,
                });
            }
        }

        // Reversed so the first listed subdirectory is visited next
        pending.extend(subdirs.into_iter().rev());
    }

    Ok(files)
}

/// Delete every file in `repo`, one at a time, stopping at the first failure.
///
/// Traversal finishes before the first delete is issued. A traversal error
/// is returned as `Err`; a delete error ends up in the report.
pub async fn clear_repository(client: &GithubClient, repo: &str) -> GithubResult<ClearReport> {
    info!("Clearing contents of repository '{}'", repo);

    let files = collect_remote_files(client, repo).await?;
    let discovered = files.len();

    if files.is_empty() {
        info!("Repository '{}' is already empty", repo);
        return Ok(ClearReport {
            discovered,
            deleted: 0,
            failure: None,
        });
    }

    info!("Found {} files to delete in '{}'", discovered, repo);

    let mut deleted = 0;
    for file in files {
        let message = format!("chore: delete {}", basename(&file.path));
        if let Err(e) = client.delete_file(repo, &file.path, &file.sha, &message).await {
            error!(
                "Stopping clear of '{}' after {}/{} deletions: {}",
                repo, deleted, discovered, e
            );
            return Ok(ClearReport {
                discovered,
                deleted,
                failure: Some(DeleteFailure {
                    path: file.path,
                    error: e,
                }),
            });
        }
        deleted += 1;
    }

    info!("Cleared {} files from '{}'", deleted, repo);
    Ok(ClearReport {
        discovered,
        deleted,
        failure: None,
    })
}

pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
