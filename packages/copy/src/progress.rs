//! Progress tracking for tree copies.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Progress information for a tree copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyProgress {
    /// Total number of files to copy.
    pub files_total: u64,
    /// Number of files copied so far.
    pub files_copied: u64,
    /// File most recently copied, if any.
    pub current_file: Option<String>,
}

impl CopyProgress {
    /// Create a new progress report.
    #[must_use]
    pub const fn new(files_total: u64, files_copied: u64, current_file: Option<String>) -> Self {
        Self {
            files_total,
            files_copied,
            current_file,
        }
    }

    /// Calculate progress as a percentage (0.0 to 100.0).
    ///
    /// An empty tree is reported as complete.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.files_total == 0 {
            100.0
        } else {
            (self.files_copied as f64 / self.files_total as f64) * 100.0
        }
    }

    /// Whether every file has been copied.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.files_copied >= self.files_total
    }
}

/// Counters for the copy loop.
#[derive(Debug, Default)]
pub(crate) struct ProgressTracker {
    files_total: u64,
    files_copied: u64,
}

impl ProgressTracker {
    /// Create a tracker expecting `total` files.
    #[must_use]
    pub(crate) const fn with_total(total: u64) -> Self {
        Self {
            files_total: total,
            files_copied: 0,
        }
    }

    /// Increment the copied count by 1, returning the new count.
    pub(crate) const fn increment_copied(&mut self) -> u64 {
        self.files_copied += 1;
        self.files_copied
    }

    /// Get a progress snapshot.
    #[must_use]
    pub(crate) const fn snapshot(&self, current_file: Option<String>) -> CopyProgress {
        CopyProgress::new(self.files_total, self.files_copied, current_file)
    }
}
