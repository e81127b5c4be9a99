use crate::patch::{backup_target, is_patched, replace_target, PatchError, PatchLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Backup already present; nothing was touched
    AlreadyPatched,
    /// Backup created and target replaced
    Applied,
}

/// Apply the replacement file over the target, at most once.
///
/// Workflow:
/// 1. If the backup exists, stop
/// 2. Copy the target to the backup
/// 3. Copy the replacement over the target
///
/// There is no rollback: if step 3 fails the backup stays behind and later
/// runs report `AlreadyPatched`.
pub fn run(layout: &PatchLayout) -> Result<ApplyOutcome, PatchError> {
    if is_patched(layout)? {
        return Ok(ApplyOutcome::AlreadyPatched);
    }

    backup_target(layout)?;
    replace_target(layout)?;

    Ok(ApplyOutcome::Applied)
}
