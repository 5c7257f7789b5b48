//! # Walker Module
//!
//! This module provides the recursive directory traversal for the stamper.
//! The descent is complete: every subdirectory is visited, with no exclusion
//! list (version-control metadata included). Only regular files are collected;
//! symlinks are neither followed nor returned.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Traverses a directory recursively and collects all regular files.
///
/// Any filesystem error during the walk (unreadable directory, entry vanished
/// mid-walk) propagates with path context rather than being masked.
///
/// # Parameters
///
/// * `dir` - The directory to traverse
///
/// # Returns
///
/// A vector of file paths found under the directory.
pub fn traverse_directory(dir: &Path) -> Result<Vec<PathBuf>> {
  let mut all_files = Vec::new();

  let mut dirs_to_process = VecDeque::new();
  dirs_to_process.push_back(dir.to_path_buf());

  debug!("Scanning directory: {}", dir.display());

  while let Some(current_dir) = dirs_to_process.pop_front() {
    let entries =
      std::fs::read_dir(&current_dir).with_context(|| format!("Failed to read directory: {}", current_dir.display()))?;

    for entry in entries {
      let entry = entry.with_context(|| format!("Failed to read directory entry in {}", current_dir.display()))?;
      let path = entry.path();

      // Prefer cached dirent file type to avoid extra syscalls where possible.
      let file_type = entry
        .file_type()
        .with_context(|| format!("Failed to determine file type of {}", path.display()))?;

      if file_type.is_dir() {
        dirs_to_process.push_back(path);
      } else if file_type.is_file() {
        all_files.push(path);
      }
    }
  }

  debug!("Found {} files under {}", all_files.len(), dir.display());

  Ok(all_files)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  #[test]
  fn test_traverse_collects_nested_files() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    fs::create_dir_all(temp_dir.path().join("a/b"))?;
    fs::write(temp_dir.path().join("top.swift"), "")?;
    fs::write(temp_dir.path().join("a/mid.swift"), "")?;
    fs::write(temp_dir.path().join("a/b/deep.txt"), "")?;

    let mut files = traverse_directory(temp_dir.path())?;
    files.sort();

    let names: Vec<_> = files
      .iter()
      .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
      .collect();
    assert_eq!(files.len(), 3);
    assert!(names.contains(&"top.swift"));
    assert!(names.contains(&"mid.swift"));
    assert!(names.contains(&"deep.txt"));
    Ok(())
  }

  #[test]
  fn test_traverse_missing_directory_is_an_error() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let missing = temp_dir.path().join("no_such_dir");
    assert!(traverse_directory(&missing).is_err());
  }

  #[test]
  fn test_traverse_empty_directory_finds_nothing() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let files = traverse_directory(temp_dir.path())?;
    assert!(files.is_empty());
    Ok(())
  }
}
