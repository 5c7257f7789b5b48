//! # Output Module
//!
//! This module centralizes the user-facing output for the bannerstamp tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! ## Design Goals
//!
//! - **Scannable**: Use formatting to make output easy to parse visually
//! - **Progressive**: More detail with `-v`, silence with `-q`
//! - **Scriptable**: Keep stdout predictable for piping/automation

use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;

/// Symbols used in output
pub mod symbols {
  /// Run finished
  pub const SUCCESS: &str = "\u{2713}"; // ✓
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the end-of-run summary.
///
/// - With stamped files: "✓ Stamped N files in X.XXs"
/// - Without: "✓ All files already stamped"
pub fn print_summary(stamped: u64, elapsed: Duration) {
  if is_quiet() {
    return;
  }

  let check = symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green());

  if stamped > 0 {
    let files_word = if stamped == 1 { "file" } else { "files" };
    println!("{} Stamped {} {} in {:.2}s", check, stamped, files_word, elapsed.as_secs_f64());
  } else {
    println!("{} All files already stamped", check);
  }
}
