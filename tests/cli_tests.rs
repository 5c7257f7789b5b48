use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use bannerstamp::banner::BannerTemplate;
use predicates::prelude::*;
use tempfile::tempdir;

// Year pinned with --year so tests never depend on the system clock
const YEAR: i32 = 2026;

fn bannerstamp_cmd(dir: &Path) -> Command {
  let mut cmd = Command::cargo_bin("bannerstamp").expect("binary built");
  cmd.current_dir(dir).args(["--colors", "never", "--year", "2026"]);
  cmd
}

fn banner_for(year: i32) -> String {
  BannerTemplate::builtin().render(year)
}

fn stamped_bytes(original: &[u8]) -> Vec<u8> {
  let mut expected = banner_for(YEAR).into_bytes();
  expected.push(b'\n');
  expected.extend_from_slice(original);
  expected
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
  let path = dir.join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

#[test]
fn test_exits_1_when_no_matching_files() -> Result<()> {
  let temp_dir = tempdir()?;
  fs::create_dir(temp_dir.path().join("src"))?;
  write_file(temp_dir.path(), "src/notes.txt", b"no swift here\n")?;

  bannerstamp_cmd(temp_dir.path()).arg("src").assert().code(1);
  Ok(())
}

#[test]
fn test_stamps_file_and_exits_0() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "src/Player.swift", b"class Player {}\n")?;

  bannerstamp_cmd(temp_dir.path())
    .arg("src")
    .assert()
    .code(0)
    .stdout(predicate::str::contains("Stamped"));

  assert_eq!(fs::read(&path)?, stamped_bytes(b"class Player {}\n"));
  Ok(())
}

#[test]
fn test_second_run_exits_1_and_leaves_content_unchanged() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "src/Player.swift", b"class Player {}\n")?;

  bannerstamp_cmd(temp_dir.path()).arg("src").assert().code(0);
  let after_first = fs::read(&path)?;

  bannerstamp_cmd(temp_dir.path())
    .arg("src")
    .assert()
    .code(1)
    .stdout(predicate::str::contains("All files already stamped"));

  assert_eq!(fs::read(&path)?, after_first);
  Ok(())
}

#[test]
fn test_missing_directory_exits_2() -> Result<()> {
  let temp_dir = tempdir()?;

  bannerstamp_cmd(temp_dir.path())
    .arg("no_such_dir")
    .assert()
    .code(2)
    .stderr(predicate::str::contains("ERROR"));
  Ok(())
}

#[test]
fn test_default_dirs_are_stamped() -> Result<()> {
  let temp_dir = tempdir()?;
  let mut paths = Vec::new();
  for dir in ["Addons", "Classes", "Plugins", "Widevine"] {
    paths.push(write_file(temp_dir.path(), &format!("{dir}/File.swift"), b"class File {}\n")?);
  }

  bannerstamp_cmd(temp_dir.path()).assert().code(0);

  for path in &paths {
    assert_eq!(fs::read(path)?, stamped_bytes(b"class File {}\n"));
  }
  Ok(())
}

#[test]
fn test_banner_in_tracked_range_is_kept() -> Result<()> {
  let temp_dir = tempdir()?;
  let mut content = banner_for(2018).into_bytes();
  content.extend_from_slice(b"\nclass Player {}\n");
  let path = write_file(temp_dir.path(), "src/Player.swift", &content)?;

  bannerstamp_cmd(temp_dir.path()).arg("src").assert().code(1);

  assert_eq!(fs::read(&path)?, content);
  Ok(())
}

#[test]
fn test_stale_banner_stacks_a_second_banner() -> Result<()> {
  let temp_dir = tempdir()?;
  // Ten years before the banner was introduced: treated as unstamped
  let mut original = banner_for(2007).into_bytes();
  original.extend_from_slice(b"\nclass Player {}\n");
  let path = write_file(temp_dir.path(), "src/Player.swift", &original)?;

  bannerstamp_cmd(temp_dir.path()).arg("src").assert().code(0);

  // Two banner blocks back to back: new one first, stale one kept intact
  assert_eq!(fs::read(&path)?, stamped_bytes(&original));
  Ok(())
}

#[test]
fn test_five_of_ten_files_need_stamping() -> Result<()> {
  let temp_dir = tempdir()?;

  let mut stamped_content = banner_for(YEAR).into_bytes();
  stamped_content.extend_from_slice(b"\nclass Stamped {}\n");

  let mut already_stamped = Vec::new();
  for i in 0..5 {
    already_stamped.push(write_file(temp_dir.path(), &format!("src/stamped_{i}.swift"), &stamped_content)?);
  }
  let mut unstamped = Vec::new();
  for i in 0..5 {
    unstamped.push(write_file(temp_dir.path(), &format!("src/plain_{i}.swift"), b"class Plain {}\n")?);
  }

  bannerstamp_cmd(temp_dir.path())
    .arg("src")
    .assert()
    .code(0)
    .stdout(predicate::str::contains("Stamped 5 files"));

  for path in &already_stamped {
    assert_eq!(fs::read(path)?, stamped_content);
  }
  for path in &unstamped {
    assert_eq!(fs::read(path)?, stamped_bytes(b"class Plain {}\n"));
  }
  Ok(())
}

#[test]
fn test_extension_flag_selects_other_files() -> Result<()> {
  let temp_dir = tempdir()?;
  let kotlin = write_file(temp_dir.path(), "src/Player.kt", b"class Player\n")?;
  let swift = write_file(temp_dir.path(), "src/Player.swift", b"class Player {}\n")?;

  bannerstamp_cmd(temp_dir.path())
    .args(["--extension", "kt", "src"])
    .assert()
    .code(0);

  assert_eq!(fs::read(&kotlin)?, stamped_bytes(b"class Player\n"));
  assert_eq!(fs::read(&swift)?, b"class Player {}\n");
  Ok(())
}

#[test]
fn test_extension_flag_tolerates_leading_dot() -> Result<()> {
  let temp_dir = tempdir()?;
  let kotlin = write_file(temp_dir.path(), "src/Player.kt", b"class Player\n")?;

  bannerstamp_cmd(temp_dir.path())
    .args(["--extension", ".kt", "src"])
    .assert()
    .code(0);

  assert_eq!(fs::read(&kotlin)?, stamped_bytes(b"class Player\n"));
  Ok(())
}

#[test]
fn test_quiet_mode_suppresses_stdout() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "src/Player.swift", b"class Player {}\n")?;

  bannerstamp_cmd(temp_dir.path())
    .args(["--quiet", "src"])
    .assert()
    .code(0)
    .stdout(predicate::str::is_empty());
  Ok(())
}
