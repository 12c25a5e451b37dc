use crate::{ArchiveError, ArchiveResult, extract_archive, normalize_layout};

use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

const EXTRACTED_DIR: &str = "extracted";
const FALLBACK_ARCHIVE_NAME: &str = "upload.zip";

/// Scratch space for one workflow run. Holds the downloaded archive and the
/// extraction directory; everything is removed when the value is dropped.
#[derive(Debug)]
pub struct StagingArea {
    _dir: TempDir,
    archive_path: PathBuf,
    extract_dir: PathBuf,
}

impl StagingArea {
    /// `archive_file_name` is reduced to its final path component.
    pub fn new(archive_file_name: &str) -> ArchiveResult<Self> {
        let dir = TempDir::with_prefix("gitdrop-")
            .map_err(|e| ArchiveError::io(std::env::temp_dir(), e))?;

        let file_name = Path::new(archive_file_name)
            .file_name()
            .filter(|name| !name.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(FALLBACK_ARCHIVE_NAME));

        let archive_path = dir.path().join(file_name);
        let extract_dir = dir.path().join(EXTRACTED_DIR);
        debug!("Staging area at {}", dir.path().display());

        Ok(Self {
            _dir: dir,
            archive_path,
            extract_dir,
        })
    }

    /// Where the downloaded archive should be written
    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    pub fn extract_dir(&self) -> &Path {
        &self.extract_dir
    }
}

/// Result of [`stage_archive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedProject {
    pub root: PathBuf,
    pub entries: usize,
    pub flattened: bool,
}

/// Extract the staged archive and unwrap a single top-level folder.
pub fn stage_archive(area: &StagingArea) -> ArchiveResult<StagedProject> {
    let entries = extract_archive(area.archive_path(), area.extract_dir())?;
    let flattened = normalize_layout(area.extract_dir())?;

    Ok(StagedProject {
        root: area.extract_dir().to_path_buf(),
        entries,
        flattened,
    })
}
