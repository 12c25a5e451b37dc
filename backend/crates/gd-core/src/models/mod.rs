pub mod description_mode;
pub mod operation;
pub mod repo_name;
