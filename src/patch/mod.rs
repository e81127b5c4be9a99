pub mod apply;
pub mod backup;
mod constants;
mod error;
mod layout;
pub mod verify;

// Re-export public items
pub use apply::{is_patched, replace_target};
pub use backup::{backup_target, restore_target};
pub use constants::{
    BACKUP_EXTENSION, DEFAULT_ENV, LIBDEPS_DIR, LIBRARY_DIR, LIBRARY_SRC_DIR, NEW_FILES_DIR,
    PATCHES_DIR, PATCH_NAME, PIO_DIR, TARGET_FILENAME,
};
pub use error::PatchError;
pub use layout::PatchLayout;
pub use verify::{check_drift, Drift};
