//! Foundry demo binary.
//!
//! Runs the two demonstration families and prints their output to stdout.
//! Logs go to stderr; `RUST_LOG` overrides the default filter.

mod first;
mod second;

use clap::{Parser, ValueEnum};
use tracing::info;

/// Demo command line arguments.
#[derive(Parser, Debug)]
#[command(name = "foundry-demo")]
#[command(about = "Exercises self-registering keyed factories")]
struct Args {
	/// Which example to run
	#[arg(short, long, value_enum, default_value_t = Example::All)]
	example: Example,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Example {
	First,
	Second,
	All,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	if matches!(args.example, Example::First | Example::All) {
		info!("running first example");
		print_lines(first::example()?);
	}

	if matches!(args.example, Example::Second | Example::All) {
		info!("running second example");
		print_lines(second::example()?);
	}

	Ok(())
}

fn print_lines(lines: Vec<String>) {
	for line in lines {
		println!("{line}");
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("foundry_factory=trace,foundry_demo=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}
