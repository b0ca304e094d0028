//! Directory replication for dir-replicate.
//!
//! Replaces a destination with an exact copy of a source tree: whatever is at
//! the destination is removed first, then the source is copied recursively.
//!
//! # Example
//!
//! ```rust,ignore
//! use dir_replicate_operations::replicate;
//!
//! let summary = replicate(Path::new("/tmp/a"), Path::new("/tmp/b"))?;
//! println!("{} files copied", summary.files_copied);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod replicate;

pub use dir_replicate_copy::CopyProgress;
pub use error::ReplicateError;
pub use replicate::{ReplicateSummary, replicate, replicate_with_progress};
