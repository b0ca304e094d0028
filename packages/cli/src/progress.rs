//! Progress bar for the copy phase.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dir_replicate_operations::CopyProgress;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar factory for the copy phase.
///
/// Bars draw on stderr and only when it is a terminal, so stdout keeps the
/// single status line.
pub struct ProgressManager {
    enabled: bool,
}

impl ProgressManager {
    /// Create a new progress manager.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a progress bar for the copy.
    ///
    /// The length is unknown until the first progress report arrives.
    /// If progress is disabled, returns a hidden progress bar.
    #[must_use]
    pub fn create_copy_bar(&self, label: &str) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {prefix:<20} [{bar:25.green/dim}] {pos}/{len} files {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("━━─"),
        );
        pb.set_prefix(label.to_string());
        pb
    }
}

/// Apply a copy progress report to a bar.
pub fn update_bar(bar: &ProgressBar, progress: &CopyProgress) {
    bar.set_length(progress.files_total);
    bar.set_position(progress.files_copied);
    bar.set_message(format!("({:.0}%)", progress.percentage()));
}
