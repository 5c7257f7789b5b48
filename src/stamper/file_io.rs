//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the stamper.
//! All operations work on raw bytes so no text-encoding transformation or
//! newline translation ever occurs.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the stamper.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads the full file content as raw bytes.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Overwrites the file with the given bytes (full truncate-and-write).
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  pub fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
