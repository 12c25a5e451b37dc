mod content_entry;
mod repository;

pub use content_entry::{ContentEntry, ContentKind, ContentsResponse};
pub use repository::{RepositoryDetail, RepositorySummary};
