//! # copycheck
//!
//! A pre-commit tool that validates copyright headers in source files.

use anyhow::Result;
use copycheck::cli::{Cli, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();

  run_check(cli.check_args)
}
