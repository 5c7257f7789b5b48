//! # Stamper Module
//!
//! This module contains the core functionality for walking directories and
//! prepending the banner to files that lack one.
//!
//! The module is organized into two submodules:
//! - [`file_io`] - Whole-file byte reads and writes
//! - [`walker`] - Recursive directory traversal
//!
//! The [`Stamper`] struct is the main entry point, orchestrating the
//! submodules into a single sequential pass per directory.

mod file_io;
mod walker;

use std::path::Path;

use anyhow::Result;
pub use file_io::FileIO;
use tracing::trace;
pub use walker::traverse_directory;

use crate::banner::BannerTemplate;
use crate::detection::{BannerDetector, YearRangeDetector};
use crate::info_log;

/// Configuration for creating a Stamper instance.
pub struct StamperConfig {
  /// Banner template rendered for the current year when stamping
  pub template: BannerTemplate,

  /// Target file extension, without the leading dot
  pub extension: String,

  /// First year for which an existing banner is accepted
  pub first_year: i32,

  /// Current year: last accepted year, and the year stamped into new banners
  pub current_year: i32,

  /// Optional detector override; defaults to [`YearRangeDetector`]
  pub detector: Option<Box<dyn BannerDetector + Send + Sync>>,
}

impl StamperConfig {
  /// Creates a new StamperConfig with the default detector.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// StamperConfig {
  ///     detector: Some(custom_detector),
  ///     ..StamperConfig::new(template, "swift", 2017, 2026)
  /// }
  /// ```
  pub fn new(template: BannerTemplate, extension: impl Into<String>, first_year: i32, current_year: i32) -> Self {
    Self {
      template,
      extension: extension.into(),
      first_year,
      current_year,
      detector: None,
    }
  }
}

/// Stamper for prepending banners to source files.
///
/// The `Stamper` is responsible for:
/// - Walking directories recursively
/// - Selecting files by exact extension match (no read occurs for the rest)
/// - Skipping files that already carry a banner for any tracked year
/// - Prepending the current-year banner to the remaining files
/// - Counting how many files were rewritten
pub struct Stamper {
  /// The current-year banner prepended when stamping
  banner: Vec<u8>,

  /// Target file extension, without the leading dot
  extension: String,

  /// Detector deciding whether a file is already stamped
  detector: Box<dyn BannerDetector + Send + Sync>,
}

impl Stamper {
  /// Creates a new stamper with the specified configuration.
  pub fn new(config: StamperConfig) -> Self {
    let detector = config.detector.unwrap_or_else(|| {
      Box::new(YearRangeDetector::new(
        &config.template,
        config.first_year,
        config.current_year,
      ))
    });

    let banner = config.template.render(config.current_year).into_bytes();

    Self {
      banner,
      extension: config.extension,
      detector,
    }
  }

  /// Processes a directory recursively, stamping every eligible file.
  ///
  /// Files are handled strictly one at a time: read, tested, and
  /// (conditionally) rewritten before the next file is touched. Interrupting
  /// the run leaves already-stamped files stamped; because stamping is
  /// idempotent, a re-run completes the remainder without double-stamping.
  ///
  /// # Parameters
  ///
  /// * `dir` - Path to the directory to process; must exist
  ///
  /// # Returns
  ///
  /// The number of files stamped during this call.
  ///
  /// # Errors
  ///
  /// Returns an error if the traversal or any file read/write fails. Files
  /// stamped before the failure stay stamped.
  pub fn process(&self, dir: &Path) -> Result<u64> {
    let files = traverse_directory(dir)?;

    let mut stamped: u64 = 0;

    for path in files {
      if !self.matches_extension(&path) {
        trace!("Skipping: {} (extension mismatch)", path.display());
        continue;
      }

      let content = FileIO::read_bytes(&path)?;

      if self.detector.has_banner(&content) {
        trace!("Skipping: {} (already stamped)", path.display());
        continue;
      }

      let new_content = self.prepend_banner(&content);
      FileIO::write_bytes(&path, &new_content)?;
      info_log!("Stamped: {}", path.display());

      stamped += 1;
    }

    Ok(stamped)
  }

  /// Checks if the content already carries a banner for any tracked year.
  pub fn has_banner(&self, content: &[u8]) -> bool {
    self.detector.has_banner(content)
  }

  /// Checks whether the file name's extension equals the target extension.
  ///
  /// The comparison is case-sensitive and exact. Files without an extension
  /// (including dotfiles such as `.swift`) never match.
  fn matches_extension(&self, path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(self.extension.as_str())
  }

  /// Builds the stamped content: banner, one separating newline, then the
  /// original bytes unmodified.
  fn prepend_banner(&self, content: &[u8]) -> Vec<u8> {
    let mut new_content = Vec::with_capacity(self.banner.len() + 1 + content.len());
    new_content.extend_from_slice(&self.banner);
    new_content.push(b'\n');
    new_content.extend_from_slice(content);
    new_content
  }
}
