use std::path::PathBuf;

use clap::Parser;
use ignore_check::DEFAULT_IGNORE_FILENAME;

/// Check whether a path is ignored by a repository's ignore files.
///
/// Prints `true` or `false` and exits zero; exits non-zero when the repository root is
/// invalid or the queried path does not exist.
#[derive(Debug, Clone, Parser)]
#[command(name = "ignore-check", version, about)]
pub struct Args {
	/// Path to check, relative to the repository root (e.g. `/target/debug`).
	pub path: String,

	/// Repository root directory.
	#[arg(short, long, default_value = ".")]
	pub root: PathBuf,

	/// Name of the ignore files to consult.
	#[arg(long, default_value = DEFAULT_IGNORE_FILENAME)]
	pub filename: String,

	/// Set diagnostic log level.
	///
	/// Use -v for debug and -vv for trace; `RUST_LOG` overrides this.
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}
