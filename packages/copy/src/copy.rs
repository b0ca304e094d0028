//! Directory tree copying.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CopyError;
use crate::progress::{CopyProgress, ProgressTracker};

/// How often (in files) progress is reported during the copy phase.
const PROGRESS_INTERVAL: u64 = 100;

/// Result of a tree copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    /// The tree was copied.
    Created {
        /// Number of files copied, linked files included.
        files_copied: u64,
        /// Number of directories created below the target root.
        dirs_created: u64,
    },
    /// Target already exists, operation skipped.
    Exists,
    /// Source does not exist, operation skipped.
    SourceNotFound,
}

/// File collected during directory enumeration.
#[derive(Debug, Clone)]
struct FileEntry {
    source: PathBuf,
    target: PathBuf,
}

/// Everything found below the source root.
#[derive(Debug, Default)]
struct Enumeration {
    /// Target directories to create, sorted so parents come first.
    dirs: BTreeSet<PathBuf>,
    files: Vec<FileEntry>,
}

/// Copy a directory tree.
///
/// Only copies if the target doesn't exist. Directories (including empty ones)
/// are created first, then files are copied one at a time.
///
/// Symlinks are followed: a link to a file becomes a copy of that file and a
/// link to a directory becomes a copy of that directory's contents.
///
/// # Arguments
///
/// * `source` - Source directory path
/// * `target` - Target directory path, its parents are created as needed
/// * `on_progress` - Callback for progress updates (called periodically, not for every file)
///
/// # Errors
///
/// * If `source` is not a directory
/// * If enumeration fails, including symlink loops
/// * If the tree contains a dangling symlink or a special file
/// * If any directory or file copy fails (fail-fast behavior)
pub fn copy_directory<F>(
    source: &Path,
    target: &Path,
    on_progress: F,
) -> Result<CopyResult, CopyError>
where
    F: Fn(&CopyProgress),
{
    log::debug!(
        "Copying directory: {} -> {}",
        source.display(),
        target.display()
    );

    if !source.exists() {
        log::debug!("Source does not exist");
        return Ok(CopyResult::SourceNotFound);
    }

    if !source.is_dir() {
        return Err(CopyError::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    if target.symlink_metadata().is_ok() {
        log::debug!("Target already exists");
        return Ok(CopyResult::Exists);
    }

    // Phase 1: enumerate the whole tree before touching the target
    let enumeration = enumerate_directory(source, target)?;
    let total_files = enumeration.files.len() as u64;

    log::debug!(
        "Found {} files and {} directories to copy",
        total_files,
        enumeration.dirs.len()
    );

    let mut tracker = ProgressTracker::with_total(total_files);
    on_progress(&tracker.snapshot(None));

    // Phase 2: directory skeleton
    create_dir(target)?;
    for dir in &enumeration.dirs {
        create_dir(dir)?;
    }

    // Phase 3: file contents
    for entry in &enumeration.files {
        copy_file_with_reflink(&entry.source, &entry.target)?;

        let copied = tracker.increment_copied();
        if copied % PROGRESS_INTERVAL == 0 || copied == total_files {
            on_progress(&tracker.snapshot(Some(entry.source.to_string_lossy().to_string())));
        }
    }

    Ok(CopyResult::Created {
        files_copied: total_files,
        dirs_created: enumeration.dirs.len() as u64,
    })
}

/// Enumerate a directory tree with `jwalk`, on the calling thread.
///
/// Links are followed, so entries below a linked directory are reported under
/// the link's own path and file types are those of the link targets.
fn enumerate_directory(source: &Path, target: &Path) -> Result<Enumeration, CopyError> {
    let mut enumeration = Enumeration::default();

    let walker = jwalk::WalkDir::new(source)
        .skip_hidden(false)
        .follow_links(true)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry in walker {
        let entry = entry.map_err(|e| CopyError::EnumerationError {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let source_path = entry.path();

        // Skip the root directory itself
        if source_path == source {
            continue;
        }

        let rel_path =
            source_path
                .strip_prefix(source)
                .map_err(|_| CopyError::EnumerationError {
                    path: source_path.clone(),
                    message: "Failed to strip prefix".to_string(),
                })?;
        let target_path = target.join(rel_path);

        // Still a symlink after following means the link target is missing
        let file_type = entry.file_type();
        if file_type.is_symlink() {
            return Err(CopyError::DanglingSymlink { path: source_path });
        } else if file_type.is_dir() {
            enumeration.dirs.insert(target_path);
        } else if file_type.is_file() {
            enumeration.files.push(FileEntry {
                source: source_path,
                target: target_path,
            });
        } else {
            return Err(CopyError::UnsupportedFileType { path: source_path });
        }
    }

    Ok(enumeration)
}

fn create_dir(path: &Path) -> Result<(), CopyError> {
    fs::create_dir_all(path).map_err(|e| CopyError::CreateDirError {
        path: path.to_path_buf(),
        io_error: e,
    })
}

/// Copy a single file, trying reflink first then falling back to regular copy.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyError> {
    // Copy-on-write clone is instant on APFS/Btrfs/XFS/ReFS
    if reflink_copy::reflink(source, target).is_ok() {
        log::trace!("Reflinked {} -> {}", source.display(), target.display());
        return Ok(());
    }

    fs::copy(source, target).map_err(|e| CopyError::FileCopyError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    })?;
    log::trace!("Copied {} -> {}", source.display(), target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[test]
    fn test_copy_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(source.join("subdir")).unwrap();
        fs::write(source.join("file1.txt"), "content1").unwrap();
        fs::write(source.join("subdir/file2.txt"), "content2").unwrap();

        let updates = Mutex::new(Vec::new());
        let result = copy_directory(&source, &target, |p| {
            updates.lock().unwrap().push(p.clone());
        })
        .unwrap();

        assert_eq!(
            result,
            CopyResult::Created {
                files_copied: 2,
                dirs_created: 1,
            }
        );
        assert_eq!(
            fs::read_to_string(target.join("file1.txt")).unwrap(),
            "content1"
        );
        assert_eq!(
            fs::read_to_string(target.join("subdir/file2.txt")).unwrap(),
            "content2"
        );

        let updates = updates.into_inner().unwrap();
        assert_eq!(updates.first().unwrap().files_copied, 0);
        assert!(updates.last().unwrap().is_complete());
    }

    #[test]
    fn test_copy_directory_keeps_empty_dirs() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(source.join("empty/nested")).unwrap();

        let result = copy_directory(&source, &target, |_| {}).unwrap();

        assert_eq!(
            result,
            CopyResult::Created {
                files_copied: 0,
                dirs_created: 2,
            }
        );
        assert!(target.join("empty/nested").is_dir());
    }

    #[test]
    fn test_copy_directory_includes_hidden_files() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(source.join(".cache")).unwrap();
        fs::write(source.join(".env"), "KEY=1").unwrap();
        fs::write(source.join(".cache/blob"), "x").unwrap();

        copy_directory(&source, &target, |_| {}).unwrap();

        assert_eq!(fs::read_to_string(target.join(".env")).unwrap(), "KEY=1");
        assert!(target.join(".cache/blob").exists());
    }

    #[test]
    fn test_copy_directory_creates_missing_parents() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("a/b/target_dir");

        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("file.txt"), "x").unwrap();

        copy_directory(&source, &target, |_| {}).unwrap();

        assert!(target.join("file.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_follows_file_symlinks() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("x/a");
        let target = dir.path().join("y/z/b");

        fs::create_dir_all(&source).unwrap();
        fs::write(dir.path().join("x/shared.txt"), "shared").unwrap();
        std::os::unix::fs::symlink("../shared.txt", source.join("f")).unwrap();

        let result = copy_directory(&source, &target, |_| {}).unwrap();

        assert_eq!(
            result,
            CopyResult::Created {
                files_copied: 1,
                dirs_created: 0,
            }
        );
        let copied = target.join("f");
        assert!(!copied.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&copied).unwrap(), "shared");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_follows_directory_symlinks() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");
        let outside = dir.path().join("outside");

        fs::create_dir_all(outside.join("inner")).unwrap();
        fs::write(outside.join("inner/data.txt"), "data").unwrap();
        fs::create_dir_all(&source).unwrap();
        std::os::unix::fs::symlink(&outside, source.join("linked")).unwrap();

        copy_directory(&source, &target, |_| {}).unwrap();

        let linked = target.join("linked");
        assert!(linked.symlink_metadata().unwrap().is_dir());
        assert_eq!(
            fs::read_to_string(linked.join("inner/data.txt")).unwrap(),
            "data"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_dangling_symlink_fails() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("ok.txt"), "ok").unwrap();
        std::os::unix::fs::symlink("missing.txt", source.join("broken")).unwrap();

        assert!(copy_directory(&source, &target, |_| {}).is_err());
        assert!(!target.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_symlink_loop_fails() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(&source).unwrap();
        std::os::unix::fs::symlink(".", source.join("again")).unwrap();

        assert!(copy_directory(&source, &target, |_| {}).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_directory_fifo_fails() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(&source).unwrap();
        let status = std::process::Command::new("mkfifo")
            .arg(source.join("pipe"))
            .status()
            .unwrap();
        assert!(status.success());

        let err = copy_directory(&source, &target, |_| {}).unwrap_err();

        assert!(matches!(err, CopyError::UnsupportedFileType { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_copy_directory_exists() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source_dir");
        let target = dir.path().join("target_dir");

        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&target).unwrap();

        let result = copy_directory(&source, &target, |_| {}).unwrap();

        assert_eq!(result, CopyResult::Exists);
    }

    #[test]
    fn test_copy_directory_source_not_found() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("missing");
        let target = dir.path().join("target_dir");

        let result = copy_directory(&source, &target, |_| {}).unwrap();

        assert_eq!(result, CopyResult::SourceNotFound);
        assert!(!target.exists());
    }

    #[test]
    fn test_copy_directory_source_is_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let target = dir.path().join("target_dir");

        fs::write(&source, "not a dir").unwrap();

        let err = copy_directory(&source, &target, |_| {}).unwrap_err();

        assert!(matches!(err, CopyError::NotADirectory { .. }));
        assert!(!target.exists());
    }
}
