use crate::patch::{restore_target, PatchError, PatchLayout};

/// Revert a previously applied patch using the backup file.
///
/// Restores the target from `<target>.bak` and removes the backup, so the
/// next apply patches again.
pub fn run(layout: &PatchLayout) -> Result<(), PatchError> {
    restore_target(layout)
}
