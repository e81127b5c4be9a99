use std::fmt;

/// Error type for patch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// Checking for the backup marker failed
    MarkerCheckFailed { file: String, reason: String },
    /// Copying the target to its backup failed
    BackupFailed { file: String, reason: String },
    /// Copying the replacement over the target failed
    ApplyFailed { file: String, reason: String },
    /// Hashing a file for the status report failed
    StatusFailed { file: String, reason: String },
    /// Revert requested but no backup exists
    NotPatched { backup: String },
    /// Restoring the target from its backup failed
    RevertFailed { file: String, reason: String },
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::MarkerCheckFailed { file, reason } => {
                write!(f, "cannot check backup marker '{}': {}", file, reason)
            }
            PatchError::BackupFailed { file, reason } => {
                write!(f, "backup failed for '{}': {}", file, reason)
            }
            PatchError::ApplyFailed { file, reason } => {
                write!(f, "apply failed for '{}': {}", file, reason)
            }
            PatchError::StatusFailed { file, reason } => {
                write!(f, "status check failed for '{}': {}", file, reason)
            }
            PatchError::NotPatched { backup } => {
                write!(f, "not patched: backup '{}' does not exist", backup)
            }
            PatchError::RevertFailed { file, reason } => {
                write!(f, "revert failed for '{}': {}", file, reason)
            }
        }
    }
}

impl std::error::Error for PatchError {}
