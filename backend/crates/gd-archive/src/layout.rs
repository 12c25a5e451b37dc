use crate::{ArchiveError, ArchiveResult};

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

const UNWRAP_PREFIX: &str = ".gd-unwrap";

/// Flatten a single wrapping directory.
///
/// When `root` holds exactly one entry and that entry is a directory, its
/// children are moved up into `root` and the wrapper is removed. Only one
/// level is unwrapped. Returns whether anything moved.
pub fn normalize_layout(root: &Path) -> ArchiveResult<bool> {
    let entries = fs::read_dir(root)
        .and_then(|dir| dir.collect::<Result<Vec<_>, _>>())
        .map_err(|e| ArchiveError::io(root, e))?;

    let [entry] = entries.as_slice() else {
        return Ok(false);
    };

    let file_type = entry.file_type().map_err(|e| ArchiveError::io(entry.path(), e))?;
    if !file_type.is_dir() {
        return Ok(false);
    }

    let mut wrapper = entry.path();

    // A child sharing the wrapper's name would collide with it in `root`
    if wrapper.join(entry.file_name()).exists() {
        let parked = unique_sibling(root);
        fs::rename(&wrapper, &parked).map_err(|e| ArchiveError::io(&wrapper, e))?;
        wrapper = parked;
    }

    let children = fs::read_dir(&wrapper)
        .and_then(|dir| dir.collect::<Result<Vec<_>, _>>())
        .map_err(|e| ArchiveError::io(&wrapper, e))?;

    for child in children {
        let from = child.path();
        let to = root.join(child.file_name());
        fs::rename(&from, &to).map_err(|e| ArchiveError::io(&from, e))?;
    }

    fs::remove_dir(&wrapper).map_err(|e| ArchiveError::io(&wrapper, e))?;

    info!(
        "Flattened wrapper directory '{}'",
        entry.file_name().to_string_lossy()
    );
    Ok(true)
}

fn unique_sibling(root: &Path) -> PathBuf {
    let mut n = 0u32;
    loop {
        let candidate = root.join(format!("{}-{}", UNWRAP_PREFIX, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
