use crate::patch::{check_drift, is_patched, Drift, PatchError, PatchLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchStatus {
    Unpatched,
    Patched { drift: Drift },
}

/// Report whether the patch is applied and whether the target still matches
/// the replacement. Never modifies anything.
pub fn run(layout: &PatchLayout) -> Result<PatchStatus, PatchError> {
    if !is_patched(layout)? {
        return Ok(PatchStatus::Unpatched);
    }

    let drift = check_drift(layout)?;
    Ok(PatchStatus::Patched { drift })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::patch_apply;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_file(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn fresh_tree_is_unpatched() {
        let root = tempdir().unwrap();
        let layout = PatchLayout::new(root.path());
        write_file(layout.target(), b"A");
        write_file(layout.replacement(), b"B");

        assert_eq!(run(&layout).unwrap(), PatchStatus::Unpatched);
    }

    #[test]
    fn applied_patch_is_in_sync() {
        let root = tempdir().unwrap();
        let layout = PatchLayout::new(root.path());
        write_file(layout.target(), b"A");
        write_file(layout.replacement(), b"B");
        patch_apply::run(&layout).unwrap();

        assert_eq!(
            run(&layout).unwrap(),
            PatchStatus::Patched {
                drift: Drift::InSync
            }
        );
    }

    #[test]
    fn updated_replacement_shows_drift() {
        let root = tempdir().unwrap();
        let layout = PatchLayout::new(root.path());
        write_file(layout.target(), b"A");
        write_file(layout.replacement(), b"B");
        patch_apply::run(&layout).unwrap();
        fs::write(layout.replacement(), b"C").unwrap();

        let status = run(&layout).unwrap();

        assert!(matches!(
            status,
            PatchStatus::Patched {
                drift: Drift::Diverged { .. }
            }
        ));
    }

    #[test]
    fn status_does_not_modify_files() {
        let root = tempdir().unwrap();
        let layout = PatchLayout::new(root.path());
        write_file(layout.target(), b"A");
        write_file(layout.replacement(), b"B");
        write_file(layout.backup(), b"X");

        run(&layout).unwrap();

        assert_eq!(fs::read(layout.target()).unwrap(), b"A");
        assert_eq!(fs::read(layout.backup()).unwrap(), b"X");
    }
}
