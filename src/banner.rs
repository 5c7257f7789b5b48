//! # Banner Module
//!
//! This module provides the banner template and its rendering. The banner is a
//! fixed multi-line comment block with a single `{{year}}` substitution point;
//! rendering is plain string replacement, not a templating engine.
//!
//! ## Example
//!
//! ```rust
//! use bannerstamp::banner::BannerTemplate;
//!
//! let template = BannerTemplate::builtin();
//! let banner = template.render(2026);
//! assert!(banner.contains("Copyright (C) 2026"));
//! ```

/// The built-in banner text, with `{{year}}` substituted at render time.
///
/// The template ends in a newline; the stamper adds one more to leave a blank
/// line between the banner and the original file content.
pub const BUILTIN_TEMPLATE: &str = "\
// ===================================================================================================
// Copyright (C) {{year}} Kaltura Inc.
//
// Licensed under the AGPLv3 license, unless a different license for a
// particular library is specified in the applicable library path.
//
// You may obtain a copy of the License at
// https://www.gnu.org/licenses/agpl-3.0.html
// ===================================================================================================
";

/// A banner template parameterized by year.
///
/// The `BannerTemplate` holds the banner text and renders it for a specific
/// copyright year. The binary always uses [`BannerTemplate::builtin`]; custom
/// text exists for library callers and tests.
#[derive(Debug, Clone)]
pub struct BannerTemplate {
  /// The banner template content
  template: String,
}

impl Default for BannerTemplate {
  fn default() -> Self {
    Self::builtin()
  }
}

impl BannerTemplate {
  /// Creates a banner template from custom text.
  ///
  /// # Parameters
  ///
  /// * `template` - The banner text, containing a `{{year}}` substitution point
  pub fn new(template: impl Into<String>) -> Self {
    Self {
      template: template.into(),
    }
  }

  /// Returns the compiled-in banner template.
  pub fn builtin() -> Self {
    Self::new(BUILTIN_TEMPLATE)
  }

  /// Renders the banner for the given copyright year.
  ///
  /// # Parameters
  ///
  /// * `year` - The year substituted for `{{year}}`
  ///
  /// # Returns
  ///
  /// The banner text with the year filled in.
  pub fn render(&self, year: i32) -> String {
    // Simple string replacement
    self.template.replace("{{year}}", &year.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_substitutes_year() {
    let template = BannerTemplate::new("Copyright (C) {{year}} Test Company\n");
    assert_eq!(template.render(2025), "Copyright (C) 2025 Test Company\n");
  }

  #[test]
  fn test_builtin_template_ends_with_newline() {
    let banner = BannerTemplate::builtin().render(2026);
    assert!(banner.ends_with('\n'));
    assert!(banner.contains("Copyright (C) 2026"));
    assert!(!banner.contains("{{year}}"));
  }

  #[test]
  fn test_different_years_render_differently() {
    let template = BannerTemplate::builtin();
    assert_ne!(template.render(2017), template.render(2018));
  }
}
