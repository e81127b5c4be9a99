use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::patch::constants::{
    BACKUP_EXTENSION, DEFAULT_ENV, LIBDEPS_DIR, LIBRARY_DIR, LIBRARY_SRC_DIR, NEW_FILES_DIR,
    PATCHES_DIR, PIO_DIR, TARGET_FILENAME,
};

/// The three paths a patch run touches, resolved against a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchLayout {
    target: PathBuf,
    backup: PathBuf,
    replacement: PathBuf,
}

impl PatchLayout {
    /// Layout for the default PlatformIO environment.
    pub fn new(project_root: &Path) -> Self {
        Self::for_env(project_root, DEFAULT_ENV)
    }

    /// Layout for the libdeps tree of a specific PlatformIO environment.
    ///
    /// - target: `<root>/.pio/libdeps/<env>/NimBLE-Arduino/src/NimBLEAdvertisedDevice.cpp`
    /// - backup: target path with `.bak` appended
    /// - replacement: `<root>/patches/new_files/NimBLEAdvertisedDevice.cpp`
    pub fn for_env(project_root: &Path, env: &str) -> Self {
        let target = project_root
            .join(PIO_DIR)
            .join(LIBDEPS_DIR)
            .join(env)
            .join(LIBRARY_DIR)
            .join(LIBRARY_SRC_DIR)
            .join(TARGET_FILENAME);
        let backup = backup_path(&target);
        let replacement = project_root
            .join(PATCHES_DIR)
            .join(NEW_FILES_DIR)
            .join(TARGET_FILENAME);

        PatchLayout {
            target,
            backup,
            replacement,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn backup(&self) -> &Path {
        &self.backup
    }

    pub fn replacement(&self) -> &Path {
        &self.replacement
    }
}

/// Append the backup suffix to the full file name (`foo.cpp` -> `foo.cpp.bak`).
fn backup_path(target: &Path) -> PathBuf {
    let mut path = OsString::from(target.as_os_str());
    path.push(BACKUP_EXTENSION);
    PathBuf::from(path)
}
