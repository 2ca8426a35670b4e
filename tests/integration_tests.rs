use std::path::{Path, PathBuf};

use assert_cmd::Command;
use copycheck::processor::MAX_SEARCH_LINES;
use copycheck::years::{current_year, render_years};
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a fixture file and return its path.
fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
  let path = dir.join(name);
  std::fs::write(&path, content).expect("fixture write");
  path
}

fn copycheck() -> Command {
  Command::cargo_bin("copycheck").expect("binary under test")
}

#[test]
fn test_stale_copyright_is_fixed_and_both_checks_reported() {
  let year = current_year();
  let temp_dir = TempDir::new().unwrap();
  let file = write_file(
    temp_dir.path(),
    "stale.rs",
    "// Copyright (c) 2020\n\nfn main() {}\n",
  );

  copycheck()
    .arg(&file)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("missing a valid copyright header"))
    .stderr(predicate::str::contains("SPDX licence identifier"))
    .stderr(predicate::str::contains(file.display().to_string()));

  // The notice was rewritten with the current year appended.
  let expected_years = render_years(&[2020, year]);
  let content = std::fs::read_to_string(&file).unwrap();
  assert_eq!(content, format!("// Copyright (c) {expected_years}\n\nfn main() {{}}\n"));
}

#[test]
fn test_valid_file_passes_silently() {
  let year = current_year();
  let temp_dir = TempDir::new().unwrap();
  let content = format!("// Copyright (c) {year} Example Ltd.\n//\n// SPDX-License-Identifier: MIT\n\nfn main() {{}}\n");
  let file = write_file(temp_dir.path(), "clean.rs", &content);

  copycheck()
    .arg(&file)
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::is_empty());

  // Passing files are never touched.
  assert_eq!(std::fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn test_header_below_scan_bound_is_not_detected() {
  let year = current_year();
  let temp_dir = TempDir::new().unwrap();

  // A header on line index 21 sits one past the bound: the scan misses it,
  // but the rewriter searches the whole file and finds the notice already
  // canonical, so the overwrite reproduces the content byte for byte.
  let mut content = "//\n".repeat(MAX_SEARCH_LINES + 1);
  content.push_str(&format!("// Copyright (c) {year}\n// SPDX-License-Identifier: MIT\n"));
  let file = write_file(temp_dir.path(), "buried.rs", &content);

  copycheck()
    .arg(&file)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("missing a valid copyright header"))
    .stderr(predicate::str::contains("SPDX licence identifier"));

  assert_eq!(std::fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn test_file_without_any_notice_is_reported_but_never_gains_one() {
  let temp_dir = TempDir::new().unwrap();
  let content = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
  let file = write_file(temp_dir.path(), "plain.rs", content);

  copycheck()
    .arg(&file)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("missing a valid copyright header"))
    .stderr(predicate::str::contains("SPDX licence identifier"));

  // No notice to anchor a rewrite on: the file stays as it was.
  assert_eq!(std::fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn test_missing_spdx_alone_does_not_modify_the_file() {
  let year = current_year();
  let temp_dir = TempDir::new().unwrap();
  let content = format!("// Copyright (c) {year}\n\nfn main() {{}}\n");
  let file = write_file(temp_dir.path(), "no_spdx.rs", &content);

  copycheck()
    .arg(&file)
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("SPDX licence identifier"))
    .stderr(predicate::str::contains("copyright header").not());

  assert_eq!(std::fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn test_multiple_files_accumulate_per_check() {
  let year = current_year();
  let temp_dir = TempDir::new().unwrap();

  let clean = write_file(
    temp_dir.path(),
    "clean.rs",
    &format!("// Copyright (c) {year}\n// SPDX-License-Identifier: MIT\n"),
  );
  let stale = write_file(
    temp_dir.path(),
    "stale.rs",
    "// Copyright (c) 2019-2020\n// SPDX-License-Identifier: MIT\n",
  );
  let no_spdx = write_file(
    temp_dir.path(),
    "no_spdx.rs",
    &format!("// Copyright (c) {year}\nfn main() {{}}\n"),
  );

  let output = copycheck()
    .args([&clean, &stale, &no_spdx])
    .output()
    .expect("spawn copycheck");

  assert_eq!(output.status.code(), Some(1));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("1 file missing a valid copyright header"));
  assert!(stderr.contains("1 file missing the SPDX licence identifier"));
  assert!(stderr.contains(&stale.display().to_string()));
  assert!(stderr.contains(&no_spdx.display().to_string()));
  assert!(!stderr.contains(&clean.display().to_string()));

  // Only the stale file was rewritten.
  let expected_years = render_years(&[2019, 2020, year]);
  let stale_content = std::fs::read_to_string(&stale).unwrap();
  assert!(stale_content.starts_with(&format!("// Copyright (c) {expected_years}")));
}

#[test]
fn test_missing_file_aborts_the_run() {
  let temp_dir = TempDir::new().unwrap();
  let missing = temp_dir.path().join("does_not_exist.rs");

  copycheck()
    .arg(&missing)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn test_no_arguments_passes() {
  copycheck()
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::is_empty());
}

#[test]
fn test_quiet_mode_suppresses_rewrite_info() {
  let temp_dir = TempDir::new().unwrap();
  let file = write_file(temp_dir.path(), "stale.rs", "// Copyright (c) 2020\n");

  // Without -q the rewrite is announced on stdout; with -q stdout is empty.
  copycheck()
    .arg("--colors=never")
    .arg(&file)
    .assert()
    .failure()
    .stdout(predicate::str::contains("Updated copyright notice"));

  let file2 = write_file(temp_dir.path(), "stale2.rs", "// Copyright (c) 2020\n");
  copycheck()
    .arg("-q")
    .arg(&file2)
    .assert()
    .failure()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_mode_logs_per_file_progress() {
  let year = current_year();
  let temp_dir = TempDir::new().unwrap();
  let file = write_file(
    temp_dir.path(),
    "clean.rs",
    &format!("// Copyright (c) {year}\n// SPDX-License-Identifier: MIT\n"),
  );

  copycheck()
    .arg("-v")
    .arg("--colors=never")
    .arg(&file)
    .assert()
    .success()
    .stderr(predicate::str::contains(format!("Checking {}", file.display())));
}
