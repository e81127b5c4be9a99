use crate::patch::{PatchError, PatchLayout};
use crate::utils::hash::hash_file;

/// How the current target compares with the replacement file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    InSync,
    Diverged {
        target_hash: String,
        replacement_hash: String,
    },
    TargetMissing,
}

/// Compare the target against the replacement by SHA-256 hash.
pub fn check_drift(layout: &PatchLayout) -> Result<Drift, PatchError> {
    if !layout.target().exists() {
        return Ok(Drift::TargetMissing);
    }

    let target_hash = hash_file(layout.target()).map_err(|e| PatchError::StatusFailed {
        file: layout.target().display().to_string(),
        reason: e.to_string(),
    })?;
    let replacement_hash =
        hash_file(layout.replacement()).map_err(|e| PatchError::StatusFailed {
            file: layout.replacement().display().to_string(),
            reason: e.to_string(),
        })?;

    if target_hash == replacement_hash {
        Ok(Drift::InSync)
    } else {
        Ok(Drift::Diverged {
            target_hash,
            replacement_hash,
        })
    }
}
