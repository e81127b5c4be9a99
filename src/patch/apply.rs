use std::fs;
use std::io;

use crate::patch::{PatchError, PatchLayout};
use crate::utils::file_ops::copy_with_metadata;

/// Whether the backup marker exists as a regular file. Contents are never inspected.
///
/// A directory at the backup path does not count as a marker. Any stat failure
/// other than not-found is an error rather than "not patched".
pub fn is_patched(layout: &PatchLayout) -> Result<bool, PatchError> {
    match fs::metadata(layout.backup()) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PatchError::MarkerCheckFailed {
            file: layout.backup().display().to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Copy the replacement file over the target, preserving the replacement's metadata.
pub fn replace_target(layout: &PatchLayout) -> Result<(), PatchError> {
    copy_with_metadata(layout.replacement(), layout.target()).map_err(|e| {
        PatchError::ApplyFailed {
            file: layout.target().display().to_string(),
            reason: format!(
                "failed to copy replacement '{}': {}",
                layout.replacement().display(),
                e
            ),
        }
    })?;

    Ok(())
}
