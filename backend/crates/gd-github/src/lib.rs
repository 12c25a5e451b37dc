//! GitHub REST plumbing: the repository client, remote tree clearing and
//! sequential directory upload.

pub mod client;
pub mod error;
pub mod models;
pub mod tree_sync;
pub mod upload;


pub use client::GithubClient;
pub use error::{GithubError, GithubResult};
pub use models::{ContentEntry, ContentKind, RepositoryDetail, RepositorySummary};
pub use tree_sync::{ClearReport, DeleteFailure, RemoteFile, clear_repository, collect_remote_files};
pub use upload::{UploadReport, repo_path, upload_directory};
