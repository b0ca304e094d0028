//! dir-replicate CLI entry point.
//!
//! Replaces a fixed destination directory with a fresh copy of a fixed source
//! tree, prints one status line and exits 0 on success or 1 on any failure.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod progress;

use std::env;
use std::path::Path;

use clap::Parser;

use args::Args;
use dir_replicate_operations::{ReplicateError, ReplicateSummary, replicate_with_progress};
use progress::ProgressManager;

/// Tree that gets copied.
const SOURCE_PATH: &str = "/home/juan/Projects/ai_vet_clinic_lp/node_modules/typescript";

/// Location replaced by the copy.
const DEST_PATH: &str = "/home/juan/Projects/agenda/node_modules/typescript";

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    let progress_mgr = ProgressManager::new(args.should_show_progress());
    let result = run(Path::new(SOURCE_PATH), Path::new(DEST_PATH), &progress_mgr);

    match &result {
        Ok(summary) => output::print_success(&summary.source, &summary.dest),
        Err(e) => output::print_error(&e.to_string()),
    }

    std::process::exit(exit_code(&result));
}

/// Replicate with a progress bar that is cleared before returning.
fn run(
    source: &Path,
    dest: &Path,
    progress_mgr: &ProgressManager,
) -> Result<ReplicateSummary, ReplicateError> {
    log::debug!("Source: {}", source.display());
    log::debug!("Destination: {}", dest.display());

    let bar = progress_mgr.create_copy_bar("Copying");

    let result = replicate_with_progress(source, dest, |p| progress::update_bar(&bar, p));

    bar.finish_and_clear();
    result
}

/// Map the outcome to the process exit status.
const fn exit_code(result: &Result<ReplicateSummary, ReplicateError>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
