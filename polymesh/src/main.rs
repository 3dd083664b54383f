mod config;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use polymesh_format::FormatRegistry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML file with writer settings (precision, first_index)
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "converter")]
	/// Convert a polygon or mesh between file formats
	Convert(tools::convert::Subcommand),

	/// Show information about a polygon or mesh file
	Probe(tools::probe::Subcommand),

	/// List the supported file formats
	Formats(tools::formats::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => config::Config::from_path(path)?,
		None => config::Config::default(),
	};
	let registry = FormatRegistry::new_with_config(&config.writer);

	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments, &registry),
		Commands::Probe(arguments) => tools::probe::run(arguments, &registry),
		Commands::Formats(arguments) => tools::formats::run(arguments, &registry),
	}
}
