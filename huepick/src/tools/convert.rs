use crate::{config::Config, view};
use anyhow::{Context, Result};
use clap::ValueEnum;
use huepick_core::{HslColor, HsvColor, RgbColor};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// color to convert, e.g. "255, 87, 51", "#FF5733" or "180, 50%, 75%"
	/// text starting with '#' is always read as hex
	#[arg(required = true, allow_hyphen_values = true, verbatim_doc_comment)]
	text: String,

	/// representation of the input
	#[arg(long, short, value_enum, default_value_t = Space::Rgb)]
	from: Space,

	/// representation to print
	#[arg(long, short, value_enum, default_value_t = Target::All)]
	to: Target,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Space {
	Rgb,
	Hex,
	Hsv,
	Hsl,
}

impl Space {
	fn name(self) -> &'static str {
		match self {
			Space::Rgb => "rgb",
			Space::Hex => "hex",
			Space::Hsv => "hsv",
			Space::Hsl => "hsl",
		}
	}
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Target {
	Rgb,
	Hex,
	Hsv,
	Hsl,
	All,
}

/// The parsed input, kept in its own representation so that printing it in
/// the same space does not go through an 8-bit round trip.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Color {
	Rgb(RgbColor),
	Hsv(HsvColor),
	Hsl(HslColor),
}

impl Color {
	fn parse(text: &str, space: Space) -> Result<Self> {
		let text = text.trim();
		Ok(match space {
			_ if text.starts_with('#') => Color::Rgb(RgbColor::parse_str(text)?),
			Space::Rgb => Color::Rgb(RgbColor::parse_str(text)?),
			Space::Hex => Color::Rgb(RgbColor::parse_str(&format!("#{text}"))?),
			Space::Hsv => Color::Hsv(HsvColor::parse_str(text)?),
			Space::Hsl => Color::Hsl(HslColor::parse_str(text)?),
		})
	}

	fn rgb(&self) -> RgbColor {
		match self {
			Color::Rgb(rgb) => *rgb,
			Color::Hsv(hsv) => hsv.to_rgb(),
			Color::Hsl(hsl) => hsl.to_rgb(),
		}
	}

	fn hsv(&self) -> HsvColor {
		match self {
			Color::Hsv(hsv) => *hsv,
			other => HsvColor::from_rgb(other.rgb()),
		}
	}

	fn hsl(&self) -> HslColor {
		match self {
			Color::Hsl(hsl) => *hsl,
			other => HslColor::from_rgb(other.rgb()),
		}
	}
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	println!("{}", render(arguments, config)?);
	Ok(())
}

fn render(arguments: &Subcommand, config: &Config) -> Result<String> {
	let color = Color::parse(&arguments.text, arguments.from)
		.with_context(|| format!("could not read '{}' as {}", arguments.text, arguments.from.name()))?;
	log::debug!("parsed {:?} as {color:?}", arguments.text);

	let display = &config.display;
	Ok(match arguments.to {
		Target::Rgb => color.rgb().to_string(),
		Target::Hex => view::hex(color.rgb(), display),
		Target::Hsv => color.hsv().to_string(),
		Target::Hsl => color.hsl().to_string(),
		Target::All => format!(
			"rgb: {}\nhex: {}\nhsv: {}\nhsl: {}",
			color.rgb(),
			view::hex(color.rgb(), display),
			color.hsv(),
			color.hsl()
		),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use huepick_core::FormatError;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn render_args(args: &[&str]) -> Result<String> {
		#[derive(clap::Parser)]
		struct Wrapper {
			#[command(flatten)]
			inner: Subcommand,
		}
		let wrapper = <Wrapper as clap::Parser>::try_parse_from(std::iter::once("convert").chain(args.iter().copied()))?;
		render(&wrapper.inner, &Config::default())
	}

	#[rstest]
	#[case::rgb_to_all(&["255, 0, 0"], "rgb: 255, 0, 0, 255\nhex: #FF0000FF\nhsv: 0, 100%, 100%, 255\nhsl: 0, 100%, 50%, 255")]
	#[case::hex_detected(&["#00FF00", "--to", "hsl"], "120, 100%, 50%, 255")]
	#[case::hex_without_hash(&["0000FF80", "--from", "hex", "--to", "rgb"], "0, 0, 255, 128")]
	#[case::hsv_kept_exact(&["180, 50%, 75%, 200", "--from", "hsv", "--to", "hsv"], "180, 50%, 75%, 200")]
	#[case::hsv_to_rgb(&["180, 50%, 75%, 200", "-f", "hsv", "-t", "rgb"], "96, 191, 191, 200")]
	#[case::hsl_to_hex(&["-30, 100%, 50%", "--from", "hsl", "--to", "hex"], "#FF0080FF")]
	fn test_render(#[case] args: &[&str], #[case] expected: &str) {
		assert_eq!(render_args(args).unwrap(), expected);
	}

	#[test]
	fn test_render_invalid_input() {
		let err = render_args(&["1, 2", "--from", "hsv"]).unwrap_err();
		assert_eq!(err.to_string(), "could not read '1, 2' as hsv");
		assert_eq!(err.root_cause().downcast_ref::<FormatError>(), Some(&FormatError::ComponentCount(2)));
	}

	#[test]
	fn test_lowercase_hex() {
		let color = Color::parse("#abcdef", Space::Rgb).unwrap();
		let mut config = Config::default();
		config.display.uppercase_hex = false;
		assert_eq!(view::hex(color.rgb(), &config.display), "#abcdefff");
	}

	#[test]
	fn test_run() {
		run_command(vec!["huepick", "convert", "#123456"]).unwrap();
		assert!(run_command(vec!["huepick", "convert", "not a color"]).is_err());
	}
}
