//! Error types for replication.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while replicating a tree.
#[derive(Debug, Error)]
pub enum ReplicateError {
    /// Source path does not exist.
    #[error("Source does not exist: {}", path.display())]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Source exists but is not a directory.
    #[error("Source is not a directory: {}", path.display())]
    SourceNotDirectory {
        /// The source path.
        path: PathBuf,
    },

    /// Source and destination overlap, so removing one would destroy the other.
    #[error("Source {} and destination {} overlap", source_path.display(), dest_path.display())]
    OverlappingPaths {
        /// Source path.
        source_path: PathBuf,
        /// Destination path.
        dest_path: PathBuf,
    },

    /// Destination reappeared between removal and copy.
    #[error("Destination already exists: {}", path.display())]
    DestinationExists {
        /// The destination path.
        path: PathBuf,
    },

    /// Filesystem error from the copy engine.
    #[error(transparent)]
    Copy(#[from] dir_replicate_copy::CopyError),
}
