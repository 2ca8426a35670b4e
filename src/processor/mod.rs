//! # Processor Module
//!
//! This module contains the core functionality for checking files: the
//! bounded header scan, the in-place notice rewrite, and the bookkeeping of
//! which files failed which check.
//!
//! The module is organized into several submodules:
//! - [`scanner`] - Bounded scan of a file's leading lines
//! - [`rewriter`] - Whole-file copyright notice rewrite
//! - [`file_io`] - File reading and writing operations
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules over the CLI file list one file at a time.

mod file_io;
mod rewriter;
mod scanner;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use file_io::FileIO;
pub use rewriter::HeaderRewriter;
pub use scanner::{HeaderScanner, MAX_SEARCH_LINES, SPDX_LINE, ScanOutcome};
use tracing::debug;

use crate::{info_log, verbose_log};

/// Processor for running the header checks over a list of files.
///
/// The `Processor` is responsible for:
/// - Scanning each file's leading lines for a valid copyright notice and the
///   SPDX licence identifier
/// - Rewriting the copyright notice of any file failing that check
/// - Accumulating the two failure lists for reporting
///
/// Files are processed strictly sequentially; each file is opened, scanned,
/// optionally rewritten and closed before the next one is touched. An I/O
/// failure on any file aborts the run.
pub struct Processor {
  scanner: HeaderScanner,
  rewriter: HeaderRewriter,

  /// Files whose leading lines held no copyright notice with the current year
  pub bad_copyright_files: Vec<PathBuf>,

  /// Files whose leading lines held no SPDX licence identifier
  pub bad_spdx_files: Vec<PathBuf>,
}

impl Processor {
  /// Creates a processor checking against `current_year`.
  ///
  /// # Errors
  ///
  /// Returns an error if either header pattern fails to compile.
  pub fn new(current_year: i32) -> Result<Self> {
    Ok(Self {
      scanner: HeaderScanner::new(current_year)?,
      rewriter: HeaderRewriter::new(current_year)?,
      bad_copyright_files: Vec::new(),
      bad_spdx_files: Vec::new(),
    })
  }

  /// Checks a single file, rewriting its notice when the copyright check
  /// fails, and records the failures.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, is not valid UTF-8, or
  /// fails to be written back.
  pub fn check_file(&mut self, path: &Path) -> Result<()> {
    verbose_log!("Checking {}", path.display());

    let outcome = self.scanner.scan_file(path)?;
    debug!(
      "{}: copyright_found={} spdx_found={}",
      path.display(),
      outcome.copyright_found,
      outcome.spdx_found
    );

    if !outcome.copyright_found {
      self.bad_copyright_files.push(path.to_path_buf());
      if self.rewriter.update_file(path)? {
        info_log!("Updated copyright notice in {}", path.display());
      }
    }
    if !outcome.spdx_found {
      self.bad_spdx_files.push(path.to_path_buf());
    }

    Ok(())
  }

  /// Runs the check over every file in order.
  ///
  /// # Errors
  ///
  /// Returns the first I/O error encountered; there is no per-file
  /// isolation, so one bad file aborts the entire run.
  pub fn process(&mut self, files: &[PathBuf]) -> Result<()> {
    for path in files {
      self.check_file(path)?;
    }
    Ok(())
  }

  /// Returns `true` when any file failed either check.
  pub fn has_failures(&self) -> bool {
    !self.bad_copyright_files.is_empty() || !self.bad_spdx_files.is_empty()
  }
}
