mod analysis;
mod ensure;

use std::path::Path;

use tempfile::TempDir;

/// Create a temp project with the given files (parents created as needed)
pub(crate) fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, contents) in files {
        write(dir.path(), path, contents);
    }
    dir
}

pub(crate) fn write(root: &Path, path: &str, contents: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full, contents).unwrap();
}
