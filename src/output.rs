//! # Output Module
//!
//! This module centralizes the user-facing diagnostics for the copycheck
//! tool. Failure lists go to stderr so a pre-commit hook surfaces them next
//! to git's own output, and stdout stays predictable for piping.

use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream};

use crate::processor::SPDX_LINE;

/// Symbols used in output
pub mod symbols {
  /// Missing or stale header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the list of files that failed the copyright check.
///
/// Emitted only when the list is non-empty. The rewriter has already
/// attempted a fix for each of these files, so the trailer asks the user to
/// review and re-commit.
pub fn print_bad_copyright_files(files: &[PathBuf]) {
  if files.is_empty() {
    return;
  }

  let count = files.len();
  eprintln!(
    "{} {} {} missing a valid copyright header:",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  for file in files {
    eprintln!("  {}", file.display());
  }
  eprintln!("An attempted fix may have been made; please check the files and re-commit.");
}

/// Print the list of files that lack the SPDX licence identifier.
///
/// Emitted only when the list is non-empty. These files are never modified;
/// the trailer tells the user what line to add.
pub fn print_bad_spdx_files(files: &[PathBuf]) {
  if files.is_empty() {
    return;
  }

  let count = files.len();
  eprintln!(
    "{} {} {} missing the SPDX licence identifier:",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  for file in files {
    eprintln!("  {}", file.display());
  }
  eprintln!("Please add the identifier as follows: '{SPDX_LINE}'");
}
