//! Terminal output formatting.
//!
//! Both outcomes print a single line to stdout.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;

/// Format the success line naming both paths.
#[must_use]
pub fn success_line(source: &Path, dest: &Path) -> String {
    format!(
        "{} Successfully copied {} to {}",
        "✅",
        source.display().to_string().cyan(),
        dest.display().to_string().cyan()
    )
}

/// Format the failure line carrying the error description.
#[must_use]
pub fn error_line(message: &str) -> String {
    format!("{} {} {}", "❌", "Error:".red().bold(), message)
}

/// Print success message.
pub fn print_success(source: &Path, dest: &Path) {
    println!("{}", success_line(source, dest));
}

/// Print error message.
pub fn print_error(message: &str) {
    println!("{}", error_line(message));
}
