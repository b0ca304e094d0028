//! Removal of existing paths.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

use crate::error::CopyError;

/// Result of a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveResult {
    /// Something existed at the path and was removed.
    Removed,
    /// Nothing existed at the path.
    NotFound,
}

/// Remove whatever is at `path`.
///
/// Directories are removed recursively. Files and symlinks (dangling or not)
/// are unlinked; a symlink's target is never touched.
///
/// # Errors
///
/// * If the path cannot be inspected
/// * If removal fails
pub fn remove_path(path: &Path) -> Result<RemoveResult, CopyError> {
    let metadata = match path.symlink_metadata() {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Nothing to remove at {}", path.display());
            return Ok(RemoveResult::NotFound);
        }
        Err(e) => {
            return Err(CopyError::MetadataError {
                path: path.to_path_buf(),
                io_error: e,
            });
        }
    };

    let removed = if metadata.is_dir() {
        log::debug!("Removing directory tree {}", path.display());
        fs::remove_dir_all(path)
    } else {
        log::debug!("Removing {}", path.display());
        fs::remove_file(path)
    };

    removed.map_err(|e| CopyError::RemoveError {
        path: path.to_path_buf(),
        io_error: e,
    })?;

    Ok(RemoveResult::Removed)
}
