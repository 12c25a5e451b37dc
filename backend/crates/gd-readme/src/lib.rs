//! README generation for uploaded projects.
//!
//! [`analyze_project`] inspects a staged tree (languages, frameworks,
//! project type); [`generate_readme`] renders the templated document and
//! [`ensure_readme`] decides what, if anything, gets written.

pub mod analysis;
pub mod ensure;
pub mod generator;
pub mod tables;

#[cfg(test)]
mod tests;

pub use analysis::{PackageManifest, ProjectAnalysis, ProjectType, analyze_project};
pub use ensure::{README_FILE_NAME, ReadmeAction, ensure_readme};
pub use generator::{basic_readme, generate_readme};
