//! File copy helpers used when backing up and replacing files.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

/// Copy `src` to `dst`, carrying over permissions plus access and modification times.
///
/// `dst` is created or truncated. Returns the number of bytes copied.
pub fn copy_with_metadata(src: &Path, dst: &Path) -> io::Result<u64> {
    let metadata = fs::metadata(src)?;
    // fs::copy already carries the permission bits
    let copied = fs::copy(src, dst)?;

    let mut times = FileTimes::new().set_modified(metadata.modified()?);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    // futimens only needs ownership, so a read-only handle works for read-only copies
    #[cfg(unix)]
    let dest = File::open(dst)?;
    #[cfg(not(unix))]
    let dest = File::options().write(true).open(dst)?;
    dest.set_times(times)?;

    Ok(copied)
}
