//! # bannerstamp
//!
//! A tool that prepends a copyright banner to source files.

mod cli;

use std::process;

use crate::cli::Cli;

fn main() {
  let cli = Cli::parse_args();
  let args = cli.get_stamp_args();

  match cli::run_stamp(args) {
    // Exit 0 signals "something changed" so a surrounding build pipeline can
    // notice; exit 1 means no file needed stamping.
    Ok(stamped) => process::exit(if stamped > 0 { 0 } else { 1 }),
    Err(err) => {
      eprintln!("ERROR: {err:#}");
      process::exit(2);
    }
  }
}
