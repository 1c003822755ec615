mod config;
mod tools;
mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use config::Config;
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

	/// YAML file with display and picker settings
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a color between RGB, hex, HSV and HSL
	Convert(tools::convert::Subcommand),

	/// Show the color at a position on the hue/saturation surface
	Pick(tools::pick::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	let config = match &cli.config {
		Some(path) => Config::from_path(path).with_context(|| format!("could not load config {path:?}"))?,
		None => Config::default(),
	};
	log::trace!("{config:?}");

	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments, &config),
		Commands::Pick(arguments) => tools::pick::run(arguments, &config),
	}
}
