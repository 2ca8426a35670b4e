//! # copycheck
//!
//! A pre-commit tool that checks source files for a valid copyright header
//! and an MIT SPDX licence identifier, repairing stale copyright year lists
//! in place.
//!
//! A valid header includes the word `Copyright` followed by the relevant
//! copyright years, the most recent of which must be the current year, plus
//! the identifier line `SPDX-License-Identifier: MIT`. Both checks look only
//! at a bounded prefix of each file's lines. Files failing the copyright
//! check have their notice rewritten with a corrected, compacted year list
//! (e.g. `1991, 2001-2003, 2006-2007`); files missing the SPDX identifier
//! are reported but never modified.
//!
//! Intended to run against all changed files as part of a pre-commit hook,
//! e.g. `copycheck $(git diff --cached --name-only)`. The exit status is
//! non-zero whenever any file was deficient, so the hook blocks the commit
//! until the fixed files are re-staged.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use copycheck::processor::Processor;
//! use copycheck::years::current_year;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut processor = Processor::new(current_year())?;
//!     processor.process(&["src/main.rs".into()])?;
//!
//!     if processor.has_failures() {
//!         println!("Some files were missing valid headers");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`years`] - Year-list compaction and expansion (the core algorithm)
//! * [`processor`] - Per-file scanning and in-place notice rewriting
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`years`]: crate::years
//! [`processor`]: crate::processor
//! [`logging`]: crate::logging

pub mod cli;
pub mod logging;
pub mod output;
pub mod processor;
pub mod years;
