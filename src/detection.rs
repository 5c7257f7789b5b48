//! # Banner Detection Module
//!
//! This module contains the interfaces and implementations for banner detection.
//! It allows for easily replacing the detection algorithm without modifying the stamper.

use crate::banner::BannerTemplate;

/// Trait for banner detectors.
///
/// Implementations of this trait are responsible for determining whether a file
/// already carries a banner based on its raw content.
pub trait BannerDetector: Send + Sync {
  /// Checks if the content already starts with a valid banner.
  ///
  /// # Parameters
  ///
  /// * `content` - The raw file content to check
  ///
  /// # Returns
  ///
  /// `true` if the content is already stamped, `false` otherwise.
  fn has_banner(&self, content: &[u8]) -> bool;
}

/// Detector that accepts a banner rendered for any year in a fixed range.
///
/// The acceptable banners are rendered up front, one per year from
/// `first_year` through `current_year` inclusive, and tested in ascending
/// order as literal prefixes of the content with leading whitespace stripped.
/// The range is small and bounded, so the precomputed list needs no further
/// structure.
pub struct YearRangeDetector {
  /// Rendered banners in ascending year order
  banners: Vec<Vec<u8>>,
}

impl YearRangeDetector {
  /// Creates a detector for the inclusive year range `[first_year, current_year]`.
  ///
  /// An inverted range yields an empty candidate list, meaning nothing is
  /// considered stamped.
  pub fn new(template: &BannerTemplate, first_year: i32, current_year: i32) -> Self {
    let banners = (first_year..=current_year)
      .map(|year| template.render(year).into_bytes())
      .collect();

    Self { banners }
  }
}

impl BannerDetector for YearRangeDetector {
  /// Checks if the content already starts with a banner for any tracked year.
  ///
  /// Leading whitespace is stripped before comparison, so a file beginning
  /// with blank lines still matches a banner that starts at the first
  /// non-whitespace byte. The file itself is never altered by this check.
  fn has_banner(&self, content: &[u8]) -> bool {
    let stripped = strip_leading_whitespace(content);
    self.banners.iter().any(|banner| stripped.starts_with(banner))
  }
}

/// Returns the content with leading ASCII whitespace removed.
fn strip_leading_whitespace(content: &[u8]) -> &[u8] {
  let start = content
    .iter()
    .position(|byte| !byte.is_ascii_whitespace())
    .unwrap_or(content.len());
  &content[start..]
}
