//! Directory tree copying and removal with progress tracking.
//!
//! This crate provides the filesystem primitives behind `dir-replicate`:
//!
//! * Directory enumeration using `jwalk` (serial, hidden files included)
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * Symlinks followed (linked content is copied), empty directories preserved
//! * Recursive removal that never follows symlinks
//! * Progress callbacks for UI integration
//!
//! # Example
//!
//! ```rust,ignore
//! use dir_replicate_copy::{copy_directory, remove_path, CopyProgress};
//!
//! remove_path(target)?;
//! copy_directory(source, target, |progress: &CopyProgress| {
//!     println!("{}/{} files copied", progress.files_copied, progress.files_total);
//! })?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod progress;
mod remove;

pub use copy::{CopyResult, copy_directory};
pub use error::CopyError;
pub use progress::CopyProgress;
pub use remove::{RemoveResult, remove_path};
