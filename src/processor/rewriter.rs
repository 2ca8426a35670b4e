//! # Header Rewriter Module
//!
//! This module rewrites a stale copyright notice in place with a corrected,
//! compacted year list.
//!
//! Unlike the scanner, which only inspects a bounded prefix of lines, the
//! rewriter searches the WHOLE file for a notice to fix. A file whose notice
//! sits below the scan bound therefore still gets its year list repaired,
//! while a file with no notice at all is left untouched.

use std::path::Path;

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use tracing::debug;

use super::file_io::FileIO;
use crate::years::{parse_years, render_years};

/// Rewriter for missing-or-stale copyright notices.
pub struct HeaderRewriter {
  current_year: i32,
  copyright_regex: Regex,
}

impl HeaderRewriter {
  /// Creates a rewriter that corrects notices up to `current_year`.
  ///
  /// # Errors
  ///
  /// Returns an error if the notice pattern fails to compile.
  pub fn new(current_year: i32) -> Result<Self> {
    // Looser than the scanner's pattern: matches e.g. "Copyright (C) 2014-2021"
    // regardless of which years it mentions.
    let copyright_regex =
      Regex::new(r"(?i)\bcopyright\b.*[0-9,)]").context("Failed to compile copyright notice pattern")?;
    Ok(Self {
      current_year,
      copyright_regex,
    })
  }

  /// Computes the rewritten content for a file failing the copyright check.
  ///
  /// Locates the first notice match, parses its years, appends the current
  /// year when the set is empty or stale, and replaces only that first match
  /// with `Copyright (c) <years>`.
  ///
  /// Returns `None` when the content holds no notice at all; there is
  /// nothing to anchor a rewrite on.
  pub fn rewrite_content(&self, content: &str) -> Option<String> {
    let matched = self.copyright_regex.find(content)?;

    let mut years = parse_years(matched.as_str(), self.current_year);
    if years.last() != Some(&self.current_year) {
      years.push(self.current_year);
    }

    let notice = format!("Copyright (c) {}", render_years(&years));
    Some(self.copyright_regex.replace(content, NoExpand(&notice)).into_owned())
  }

  /// Updates the copyright notice in `path` to hold the correct years.
  ///
  /// The file is overwritten whenever a notice was found, even when the
  /// corrected content is byte-identical. The read-modify-write is not
  /// atomic.
  ///
  /// # Returns
  ///
  /// `true` if the file was rewritten, `false` if it holds no notice.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or written; one bad file
  /// aborts the whole run.
  pub fn update_file(&self, path: &Path) -> Result<bool> {
    let content = FileIO::read_full_content(path)?;

    match self.rewrite_content(&content) {
      Some(updated) => {
        FileIO::write_file(path, &updated)?;
        debug!("Rewrote copyright notice in {}", path.display());
        Ok(true)
      }
      None => {
        debug!("No copyright notice to rewrite in {}", path.display());
        Ok(false)
      }
    }
  }
}
