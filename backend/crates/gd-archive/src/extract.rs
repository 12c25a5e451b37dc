use crate::{ArchiveError, ArchiveResult};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, warn};
use zip::ZipArchive;
use zip::result::ZipError;

/// Unpack the entries of `archive` under `dest`, keeping relative paths.
///
/// Entries whose name would land outside `dest` (absolute paths, `..`) and
/// symlinks are skipped with a warning; the rest of the archive is still
/// extracted. Returns the number of entries written.
pub fn extract_archive(archive: &Path, dest: &Path) -> ArchiveResult<usize> {
    let file = File::open(archive).map_err(|e| ArchiveError::io(archive, e))?;
    let mut zip = ZipArchive::new(BufReader::new(file)).map_err(ArchiveError::invalid_archive)?;

    std::fs::create_dir_all(dest).map_err(|e| ArchiveError::io(dest, e))?;

    let mut written = 0;
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(read_error(dest))?;

        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping unsafe archive entry '{}'", entry.name());
            continue;
        };
        if entry.is_symlink() {
            warn!("Skipping symlink '{}'", entry.name());
            continue;
        }

        let target = dest.join(relative);
        if entry.is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| ArchiveError::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ArchiveError::io(parent, e))?;
            }
            let mut out = File::create(&target).map_err(|e| ArchiveError::io(&target, e))?;
            std::io::copy(&mut entry, &mut out).map_err(|e| ArchiveError::io(&target, e))?;
        }
        written += 1;
    }

    debug!("Extracted {} entries into {}", written, dest.display());
    Ok(written)
}

fn read_error(dest: &Path) -> impl Fn(ZipError) -> ArchiveError + '_ {
    move |e| match e {
        ZipError::Io(source) => ArchiveError::io(dest, source),
        other => ArchiveError::invalid_archive(other),
    }
}
