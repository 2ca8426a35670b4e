//! # Check Command
//!
//! This module implements the header check over the CLI file list. It wires
//! the processor to the reporting output and turns the accumulated failure
//! lists into the process exit status.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_bad_copyright_files, print_bad_spdx_files};
use crate::processor::Processor;
use crate::years::current_year;

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  /// Files to check. Each path is scanned for a copyright header with the
  /// current year and an MIT SPDX identifier; stale copyright years are
  /// fixed in place.
  #[arg(required = false, value_name = "FILE")]
  pub files: Vec<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the check command with the given arguments.
///
/// Exits the process with status 1 when any file failed either check; a run
/// where every file passes returns normally (status 0). An empty file list
/// checks nothing and passes.
///
/// # Errors
///
/// Returns an error on the first file that cannot be read or written; there
/// is no per-file isolation.
pub fn run_check(args: CheckArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and the info_log!/verbose_log!
  // macros
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  // The year is read from the clock exactly once and passed down explicitly.
  let year = current_year();
  debug!("Checking {} file(s) against year {}", args.files.len(), year);

  let mut processor = Processor::new(year)?;
  processor.process(&args.files)?;

  print_bad_copyright_files(&processor.bad_copyright_files);
  print_bad_spdx_files(&processor.bad_spdx_files);

  if processor.has_failures() {
    process::exit(1);
  }

  Ok(())
}
