use crate::{basic_readme, generate_readme};

use std::io;
use std::path::Path;

use gd_core::{DescriptionMode, Operation};
use log::info;

pub const README_FILE_NAME: &str = "README.md";

/// What [`ensure_readme`] did to the staged tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeAction {
    /// Templated README written, replacing any existing one
    Generated,
    /// No README shipped; the one-line README was written
    Basic,
    /// The archive's own README was left alone
    KeptExisting,
}

/// Make sure `root` has a top-level README according to `mode`.
pub fn ensure_readme(
    root: &Path,
    name: &str,
    mode: DescriptionMode,
    operation: Operation,
) -> io::Result<ReadmeAction> {
    let path = root.join(README_FILE_NAME);

    let action = match mode {
        DescriptionMode::Templated => {
            let contents = generate_readme(root, name);
            std::fs::write(&path, contents)?;
            ReadmeAction::Generated
        }
        DescriptionMode::Plain if path.exists() => ReadmeAction::KeptExisting,
        DescriptionMode::Plain => {
            std::fs::write(&path, basic_readme(name, operation))?;
            ReadmeAction::Basic
        }
    };

    info!("README for '{}': {:?}", name, action);
    Ok(action)
}
