//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;

/// CLI arguments for dir-replicate.
///
/// The source and destination are fixed; flags only affect presentation.
#[derive(Debug, Parser)]
#[command(
    name = "dir-replicate",
    about = "Replace the destination directory with a fresh copy of the source tree",
    version
)]
pub struct Args {
    /// Disable the progress bar (useful for CI environments).
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose logging on stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Determine if we should show the progress bar.
    #[must_use]
    pub const fn should_show_progress(&self) -> bool {
        !self.no_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["dir-replicate"]).unwrap();

        assert!(!args.verbose);
        assert!(args.should_show_progress());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from(["dir-replicate", "-v", "--no-progress"]).unwrap();

        assert!(args.verbose);
        assert!(!args.should_show_progress());
    }

    #[test]
    fn test_rejects_paths() {
        assert!(Args::try_parse_from(["dir-replicate", "/tmp/a", "/tmp/b"]).is_err());
    }
}
