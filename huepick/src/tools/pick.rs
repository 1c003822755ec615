use crate::{config::Config, view};
use anyhow::{Context, Result};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// horizontal position on the picking surface, selects the hue
	#[arg(allow_hyphen_values = true)]
	x: f64,

	/// vertical position on the picking surface, selects the saturation
	/// (top edge is fully saturated)
	#[arg(allow_hyphen_values = true, verbatim_doc_comment)]
	y: f64,

	/// brightness of the picked color, between 0 and 1
	#[arg(long, default_value_t = 1.0)]
	value: f32,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	println!("{}", render(arguments, config)?);
	Ok(())
}

fn render(arguments: &Subcommand, config: &Config) -> Result<String> {
	let surface = config.picker.surface();
	log::debug!(
		"pick at ({}, {}) on a {}x{} surface",
		arguments.x,
		arguments.y,
		surface.width(),
		surface.height()
	);

	let hsv = surface
		.color_at(arguments.x, arguments.y, arguments.value)
		.with_context(|| format!("picking surface {}x{} has no area", surface.width(), surface.height()))?;
	log::trace!("picked {hsv:?}");

	Ok(view::summary(hsv, &config.display))
}
