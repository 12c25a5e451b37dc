pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::description_mode::DescriptionMode;
pub use models::operation::Operation;
pub use models::repo_name::{MAX_REPO_NAME_LENGTH, RepoName, project_name_from_file_name};
