//! # bannerstamp
//!
//! A tool that prepends a copyright banner to source files found by walking a set of source roots.
//!
//! `bannerstamp` modifies source files in place and never touches a file that already starts with
//! the banner for any tracked year. Files are handled as raw bytes, so stamping prepends the banner
//! without re-encoding or newline translation. The whole pass is a single sequential walk: each
//! file is read, tested, optionally rewritten, and forgotten.
//!
//! ## Features
//!
//! * Recursively walk source roots and stamp eligible files with the current-year banner
//! * Idempotent: a banner for any year in the tracked range counts as already stamped
//! * Exact extension filtering (case-sensitive, no content sniffing)
//! * Exit status reports whether anything changed, so build pipelines can react
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use bannerstamp::banner::BannerTemplate;
//! use bannerstamp::stamper::{Stamper, StamperConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Accept banners stamped any year from 2017 through 2026,
//!     // stamp missing ones with the 2026 banner
//!     let config = StamperConfig::new(BannerTemplate::builtin(), "swift", 2017, 2026);
//!     let stamper = Stamper::new(config);
//!
//!     let stamped = stamper.process(Path::new("Classes"))?;
//!
//!     if stamped > 0 {
//!         println!("Stamped {stamped} files");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`stamper`] - Core functionality for walking directories and stamping files
//! * [`banner`] - Banner template and year rendering
//! * [`detection`] - Detection of already-stamped files
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`stamper`]: crate::stamper
//! [`banner`]: crate::banner
//! [`detection`]: crate::detection
//! [`logging`]: crate::logging

// Re-export modules for public API
pub mod banner;
pub mod detection;
pub mod logging;
pub mod output;
pub mod stamper;
