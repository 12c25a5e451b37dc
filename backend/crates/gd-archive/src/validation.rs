use crate::{ArchiveError, ArchiveResult};

use gd_config::UploadConfig;

/// Reject a document before it is downloaded: wrong extension or a
/// reported size above the configured cap. A missing size is accepted.
#[track_caller]
pub fn validate_upload(
    file_name: &str,
    reported_size: Option<u64>,
    config: &UploadConfig,
) -> ArchiveResult<()> {
    let extension = config.allowed_extension.to_ascii_lowercase();
    let lowered = file_name.to_ascii_lowercase();

    if lowered.len() <= extension.len() || !lowered.ends_with(&extension) {
        return Err(ArchiveError::unsupported_type(
            file_name,
            &config.allowed_extension,
        ));
    }

    if let Some(size) = reported_size
        && size > config.max_bytes
    {
        return Err(ArchiveError::too_large(size, config.max_bytes));
    }

    Ok(())
}
