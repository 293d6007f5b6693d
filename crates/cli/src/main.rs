#![deny(rust_2018_idioms)]

use std::env::var;

use clap::Parser;
use ignore_check::IgnoreChecker;
use miette::Result;
use tracing::debug;

mod args;

fn main() -> Result<()> {
	let args = args::Args::parse();

	if var("RUST_LOG").is_ok() {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.try_init()
			.ok();
	} else {
		tracing_subscriber::fmt()
			.with_env_filter(match args.verbose {
				0 => "ignore_check=warn",
				1 => "ignore_check=debug,ignore_check_cli=debug",
				_ => "trace",
			})
			.try_init()
			.ok();
	}

	debug!(version=%env!("CARGO_PKG_VERSION"), ?args, "constructing checker from CLI");

	let checker = IgnoreChecker::with_filename(&args.root, &args.filename)?;
	let ignored = checker.is_path_ignored(&args.path)?;

	println!("{ignored}");
	Ok(())
}
