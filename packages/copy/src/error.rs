//! Error types for copy and removal operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur while copying or removing a tree.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Source exists but is not a directory.
    #[error("Not a directory: {}", path.display())]
    NotADirectory {
        /// The offending source path.
        path: PathBuf,
    },

    /// Entry is neither a regular file, a directory, nor a symlink.
    #[error("Unsupported file type: {}", path.display())]
    UnsupportedFileType {
        /// The entry path.
        path: PathBuf,
    },

    /// Failed to create target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopyError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Symlink whose target does not exist.
    #[error("Dangling symlink: {}", path.display())]
    DanglingSymlink {
        /// The symlink path.
        path: PathBuf,
    },

    /// Failed to get file metadata.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    MetadataError {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to remove an existing path.
    #[error("Failed to remove {}: {io_error}", path.display())]
    RemoveError {
        /// The path being removed.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Directory enumeration failed.
    #[error("Failed to enumerate directory {}: {message}", path.display())]
    EnumerationError {
        /// The directory path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}
