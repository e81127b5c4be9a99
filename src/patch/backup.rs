//! Backup and restore of the target file.

use std::fs;

use crate::patch::{is_patched, PatchError, PatchLayout};
use crate::utils::file_ops::copy_with_metadata;

/// Copy the target file to its backup path.
///
/// The backup doubles as the "already patched" marker, so this must run
/// before the target is overwritten.
pub fn backup_target(layout: &PatchLayout) -> Result<(), PatchError> {
    copy_with_metadata(layout.target(), layout.backup()).map_err(|e| {
        PatchError::BackupFailed {
            file: layout.target().display().to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(())
}

/// Restore the target from its backup and remove the backup.
///
/// Fails with `NotPatched` if there is no backup to restore from.
pub fn restore_target(layout: &PatchLayout) -> Result<(), PatchError> {
    if !is_patched(layout)? {
        return Err(PatchError::NotPatched {
            backup: layout.backup().display().to_string(),
        });
    }

    copy_with_metadata(layout.backup(), layout.target()).map_err(|e| {
        PatchError::RevertFailed {
            file: layout.target().display().to_string(),
            reason: format!("failed to restore from backup: {}", e),
        }
    })?;

    fs::remove_file(layout.backup()).map_err(|e| PatchError::RevertFailed {
        file: layout.backup().display().to_string(),
        reason: format!("failed to remove backup: {}", e),
    })?;

    Ok(())
}
