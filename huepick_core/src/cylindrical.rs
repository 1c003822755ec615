//! Math shared by the hue based color models.
//!
//! HSV and HSL agree on how the hue is derived from RGB and on how an RGB
//! color is rebuilt from hue, chroma and a brightness offset. They only differ
//! in how saturation and value/lightness relate to the chroma.

use crate::RgbColor;

/// Hue and channel extrema of an RGB color, channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Extrema {
	pub hue: f32,
	pub max: f32,
	pub min: f32,
	pub delta: f32,
}

impl Extrema {
	pub fn of(rgb: RgbColor) -> Self {
		let [r, g, b] = rgb.unit_channels();

		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let delta = max - min;

		// achromatic colors have no defined hue, use 0
		let mut hue = if delta == 0.0 {
			0.0
		} else if max == r {
			60.0 * (((g - b) / delta) % 6.0)
		} else if max == g {
			60.0 * ((b - r) / delta + 2.0)
		} else {
			60.0 * ((r - g) / delta + 4.0)
		};

		if hue < 0.0 {
			hue += 360.0;
		}

		Self { hue, max, min, delta }
	}
}

/// Rebuilds an RGB color from a hue in `[0, 360)`, the chroma and the offset
/// added to every channel.
pub(crate) fn rgb_from_chroma(hue: f32, chroma: f32, offset: f32, alpha: u8) -> RgbColor {
	let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

	let (r, g, b) = match hue {
		0.0..60.0 => (chroma, x, 0.0),
		60.0..120.0 => (x, chroma, 0.0),
		120.0..180.0 => (0.0, chroma, x),
		180.0..240.0 => (0.0, x, chroma),
		240.0..300.0 => (x, 0.0, chroma),
		_ => (chroma, 0.0, x), // 300.0..360.0
	};

	RgbColor::new(
		unit_to_channel(r + offset),
		unit_to_channel(g + offset),
		unit_to_channel(b + offset),
		alpha,
	)
}

/// Formats with at most four decimals and no trailing zeros, so that
/// `0.6 * 100` prints as `60` rather than `60.000004`.
pub(crate) fn format_component(value: f32) -> String {
	let text = format!("{value:.4}");
	let text = text.trim_end_matches('0').trim_end_matches('.');
	if text == "-0" { "0".to_string() } else { text.to_string() }
}

/// Round half up, then clamp into a byte.
fn unit_to_channel(value: f32) -> u8 {
	(value * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}
