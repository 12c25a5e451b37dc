//! Turns an uploaded archive into a project directory ready for upload.

pub mod error;
pub mod extract;
pub mod layout;
pub mod staging;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{ArchiveError, ArchiveResult};
pub use extract::extract_archive;
pub use layout::normalize_layout;
pub use staging::{StagedProject, StagingArea, stage_archive};
pub use validation::validate_upload;
