//! # Stamp Command
//!
//! This module implements the stamp command: walk the given source roots and
//! prepend the banner to every eligible file that lacks one. This is the
//! default command when no subcommand is specified.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use bannerstamp::banner::BannerTemplate;
use bannerstamp::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use bannerstamp::output::{print_blank_line, print_summary};
use bannerstamp::stamper::{Stamper, StamperConfig};
use bannerstamp::verbose_log;
use chrono::Datelike;
use clap::Args;
use tracing::debug;

/// First year the banner was introduced. A file stamped for any year from this
/// one through the current year counts as already stamped.
const FIRST_BANNER_YEAR: i32 = 2017;

/// Source roots stamped when no directories are given.
const DEFAULT_DIRS: [&str; 4] = ["Addons", "Classes", "Plugins", "Widevine"];

/// Arguments for the stamp command
#[derive(Args, Debug)]
pub struct StampArgs {
  /// Directories to stamp, processed recursively in the given order
  #[arg(value_name = "DIR", default_values_t = DEFAULT_DIRS.map(String::from))]
  pub dirs: Vec<String>,

  /// File extension eligible for stamping (case-sensitive; leading dot
  /// optional)
  #[arg(long, short = 'e', default_value = "swift", value_name = "EXT")]
  pub extension: String,

  /// Copyright year for newly stamped banners (default: current year)
  #[arg(long, value_name = "YEAR")]
  pub year: Option<i32>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the stamp command with the given arguments.
///
/// Returns the total number of files stamped across all directories; the
/// caller maps that count onto the process exit status. Any filesystem error
/// aborts the run; files stamped before the failure stay stamped.
pub fn run_stamp(args: StampArgs) -> Result<u64> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set verbose mode for output formatting and info_log! macro
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_year = args.year.unwrap_or_else(|| chrono::Local::now().year());
  let extension = args.extension.trim_start_matches('.').to_string();

  debug!(
    "Stamping .{} files for year {} (accepting {}..={})",
    extension, current_year, FIRST_BANNER_YEAR, current_year
  );

  let config = StamperConfig::new(BannerTemplate::builtin(), extension, FIRST_BANNER_YEAR, current_year);
  let stamper = Stamper::new(config);

  let start_time = Instant::now();

  let mut stamped: u64 = 0;
  for dir in &args.dirs {
    verbose_log!("Processing directory: {}", dir);
    stamped += stamper.process(Path::new(dir))?;
  }

  if stamped > 0 {
    print_blank_line();
  }
  print_summary(stamped, start_time.elapsed());

  Ok(stamped)
}
