//! # Year Codec Module
//!
//! This module provides the bidirectional conversion between the year text
//! embedded in a copyright notice (e.g. `"1999, 2001-2005"`) and a sorted,
//! deduplicated set of years, plus the reverse canonical rendering.
//!
//! Parsing is deliberately forgiving: malformed input never errors, it just
//! yields fewer (or no) years.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

/// Years at or before this value are treated as noise and discarded.
pub const MIN_YEAR: i32 = 1900;

/// Maximal digit runs; adjacency to a hyphen is checked separately since the
/// regex engine has no lookaround.
static DIGIT_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("digit run regex must compile"));

/// Inclusive ranges such as `2001-2005`.
static RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+-\d+").expect("range regex must compile"));

/// Returns the current calendar year from the system clock.
///
/// Read once at process start and passed explicitly into the pure functions
/// below, so they stay testable without manipulating the clock.
pub fn current_year() -> i32 {
  chrono::Local::now().year()
}

/// Extracts the set of years covered by a copyright notice fragment.
///
/// Standalone digit runs become single years and `digits-digits` substrings
/// expand inclusively into their constituent years. The union is filtered to
/// `MIN_YEAR < y <= current_year`, deduplicated and sorted ascending.
///
/// # Parameters
///
/// * `text` - The notice fragment to parse
/// * `current_year` - Upper bound for accepted years
///
/// # Returns
///
/// The accepted years in ascending order, without duplicates.
pub fn parse_years(text: &str, current_year: i32) -> Vec<i32> {
  let bytes = text.as_bytes();
  let mut years: BTreeSet<i32> = BTreeSet::new();

  for m in DIGIT_RUN_REGEX.find_iter(text) {
    // Runs touching a hyphen are halves of a range, not standalone years.
    let preceded_by_hyphen = m.start() > 0 && bytes[m.start() - 1] == b'-';
    let followed_by_hyphen = bytes.get(m.end()) == Some(&b'-');
    if preceded_by_hyphen || followed_by_hyphen {
      continue;
    }
    if let Ok(year) = m.as_str().parse::<i32>() {
      years.insert(year);
    }
  }

  for m in RANGE_REGEX.find_iter(text) {
    let Some((low, high)) = m.as_str().split_once('-') else {
      continue;
    };
    if let (Ok(low), Ok(high)) = (low.parse::<i32>(), high.parse::<i32>()) {
      // Clamp before expanding; anything outside the window is filtered out
      // below anyway, and absurd ranges must not allocate.
      let low = low.max(MIN_YEAR + 1);
      let high = high.min(current_year);
      years.extend(low..=high);
    }
  }

  years.into_iter().filter(|&y| MIN_YEAR < y && y <= current_year).collect()
}

/// Renders a year set as its compacted string form.
///
/// E.g. `[1991, 2001, 2002, 2003, 2006, 2007]` becomes
/// `"1991, 2001-2003, 2006-2007"`.
///
/// Runs of two or more consecutive years collapse to `start-end`; note that
/// the threshold is two, so `[2020, 2021]` renders as `"2020-2021"`. The
/// input is expected ascending and deduplicated, as produced by
/// [`parse_years`]. An empty slice renders as the empty string.
pub fn render_years(years: &[i32]) -> String {
  let mut tokens: Vec<String> = Vec::new();

  let mut i = 0;
  while i < years.len() {
    let start = years[i];
    let mut end = start;
    while i + 1 < years.len() && years[i + 1] == end + 1 {
      i += 1;
      end = years[i];
    }
    if end > start {
      tokens.push(format!("{start}-{end}"));
    } else {
      tokens.push(start.to_string());
    }
    i += 1;
  }

  tokens.join(", ")
}
