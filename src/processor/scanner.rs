//! # Header Scanner Module
//!
//! This module determines, for a single file, whether its leading lines
//! already contain a copyright notice mentioning the current year and the
//! required SPDX licence identifier.
//!
//! The scan is bounded: only line indices `0..=MAX_SEARCH_LINES` are ever
//! inspected. A valid header appearing below the bound is not detected. The
//! scan never modifies the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// Number of lines past the first that are searched for a header.
pub const MAX_SEARCH_LINES: usize = 20;

/// Exact identifier phrase a file must carry to pass the licence check.
pub const SPDX_LINE: &str = "SPDX-License-Identifier: MIT";

static SPDX_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)SPDX-License-Identifier: MIT").expect("SPDX regex must compile"));

/// Result of scanning a single file's leading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
  /// Whether a copyright notice mentioning the current year was found
  pub copyright_found: bool,
  /// Whether the SPDX licence identifier was found
  pub spdx_found: bool,
}

impl ScanOutcome {
  /// Returns `true` when both checks passed.
  pub const fn is_clean(self) -> bool {
    self.copyright_found && self.spdx_found
  }
}

/// Scanner for the bounded header check.
///
/// The copyright pattern embeds the current year, so the scanner is built
/// once per run rather than from a static.
pub struct HeaderScanner {
  copyright_regex: Regex,
}

impl HeaderScanner {
  /// Creates a scanner that accepts notices mentioning `current_year`.
  ///
  /// # Errors
  ///
  /// Returns an error if the copyright pattern fails to compile.
  pub fn new(current_year: i32) -> Result<Self> {
    // The word COPYRIGHT followed eventually by the current year, any case.
    let copyright_regex = Regex::new(&format!(r"(?i)\bcopyright.*{current_year}"))
      .context("Failed to compile copyright header pattern")?;
    Ok(Self { copyright_regex })
  }

  /// Scans the leading lines of `reader` for the two header checks.
  ///
  /// Lines beyond the search bound are never read. Stops early once both
  /// checks have passed.
  ///
  /// # Errors
  ///
  /// Returns an error if a line cannot be read, including content that is
  /// not valid UTF-8.
  pub fn scan<R: BufRead>(&self, reader: R) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome {
      copyright_found: false,
      spdx_found: false,
    };

    for (line_num, line) in reader.lines().enumerate() {
      if line_num > MAX_SEARCH_LINES {
        break;
      }
      let line = line?;
      if self.copyright_regex.is_match(&line) {
        outcome.copyright_found = true;
      }
      if SPDX_REGEX.is_match(&line) {
        outcome.spdx_found = true;
      }
      if outcome.is_clean() {
        break;
      }
    }

    Ok(outcome)
  }

  /// Opens `path` and scans its leading lines.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be opened or read; the path is
  /// attached as context.
  pub fn scan_file(&self, path: &Path) -> Result<ScanOutcome> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    self
      .scan(BufReader::new(file))
      .with_context(|| format!("Failed to read file: {}", path.display()))
  }
}
