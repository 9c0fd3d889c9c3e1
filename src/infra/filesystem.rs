//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::Path;

use crate::error::FilesystemError;

/// Check whether a regular file exists at `path`
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Create the parent directory of `path` if it does not exist yet
///
/// Returns `true` when a directory had to be created.
pub fn ensure_parent_dir(path: &Path) -> Result<bool, FilesystemError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            create_dir_all(parent)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
