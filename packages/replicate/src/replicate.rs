//! Replace a destination with a fresh copy of a source tree.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use dir_replicate_copy::{
    CopyError, CopyProgress, CopyResult, RemoveResult, copy_directory, remove_path,
};
use path_clean::PathClean;

use crate::error::ReplicateError;

/// Outcome of a successful replication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicateSummary {
    /// Source tree that was copied.
    pub source: PathBuf,
    /// Destination that now mirrors the source.
    pub dest: PathBuf,
    /// Whether something existed at the destination and was removed first.
    pub removed_existing: bool,
    /// Number of files copied, linked files included.
    pub files_copied: u64,
    /// Number of directories created below the destination root.
    pub dirs_created: u64,
}

/// Replace `dest` with a copy of `source`.
///
/// See [`replicate_with_progress`].
///
/// # Errors
///
/// * If the paths overlap
/// * If removing the existing destination fails
/// * If the source is missing or not a directory
/// * If any part of the copy fails
pub fn replicate(source: &Path, dest: &Path) -> Result<ReplicateSummary, ReplicateError> {
    replicate_with_progress(source, dest, |_| {})
}

/// Replace `dest` with a copy of `source`, reporting copy progress.
///
/// Whatever exists at `dest` is removed before the copy starts. There is no
/// rollback: if the copy then fails, `dest` is left absent or incomplete.
///
/// # Arguments
///
/// * `source` - Source directory
/// * `dest` - Destination path, replaced wholesale
/// * `on_progress` - Progress callback (called periodically, not for every file)
///
/// # Errors
///
/// * If the paths overlap (checked before anything is removed)
/// * If removing the existing destination fails
/// * If the source is missing or not a directory
/// * If any part of the copy fails
pub fn replicate_with_progress<F>(
    source: &Path,
    dest: &Path,
    on_progress: F,
) -> Result<ReplicateSummary, ReplicateError>
where
    F: Fn(&CopyProgress),
{
    log::info!("Replicating {} to {}", source.display(), dest.display());

    check_overlap(source, dest)?;

    let removed_existing = remove_path(dest)? == RemoveResult::Removed;
    if removed_existing {
        log::debug!("Removed existing destination {}", dest.display());
    }

    let (files_copied, dirs_created) = match copy_directory(source, dest, on_progress) {
        Ok(CopyResult::Created {
            files_copied,
            dirs_created,
        }) => (files_copied, dirs_created),
        Ok(CopyResult::SourceNotFound) => {
            return Err(ReplicateError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        Ok(CopyResult::Exists) => {
            return Err(ReplicateError::DestinationExists {
                path: dest.to_path_buf(),
            });
        }
        Err(CopyError::NotADirectory { path }) => {
            return Err(ReplicateError::SourceNotDirectory { path });
        }
        Err(e) => return Err(e.into()),
    };

    log::info!(
        "Copied {} files and {} directories",
        files_copied,
        dirs_created
    );

    Ok(ReplicateSummary {
        source: source.to_path_buf(),
        dest: dest.to_path_buf(),
        removed_existing,
        files_copied,
        dirs_created,
    })
}

/// Fail if either path contains the other.
///
/// The comparison is lexical: both paths are made absolute and cleaned,
/// symlinks are not resolved.
fn check_overlap(source: &Path, dest: &Path) -> Result<(), ReplicateError> {
    let source_abs = normalize(source);
    let dest_abs = normalize(dest);

    if source_abs.starts_with(&dest_abs) || dest_abs.starts_with(&source_abs) {
        return Err(ReplicateError::OverlappingPaths {
            source_path: source.to_path_buf(),
            dest_path: dest.to_path_buf(),
        });
    }

    Ok(())
}

fn normalize(path: &Path) -> PathBuf {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .clean()
}
