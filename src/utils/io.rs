//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents, wrapping failures with the offending path.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::InvalidData(format!("Cannot read {}: {}", path.display(), e))
    })
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// Prevents a partial component file if the process dies mid-write. The
/// rename is atomic on POSIX filesystems, so readers always see either the
/// old content or the new content.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let filename = path.file_name().ok_or_else(|| {
        Error::InvalidData(format!("Invalid output path: {}", path.display()))
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
