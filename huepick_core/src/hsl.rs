//! Hue, saturation and lightness.
//!
//! Lightness is the midpoint between the strongest and the weakest RGB channel.
//! Text form and construction rules are the same as for [`crate::HsvColor`],
//! with lightness in place of value: `"H, S%, L%, A"`.

use crate::{
	RgbColor,
	cylindrical::{Extrema, format_component, rgb_from_chroma},
	parse::{clamp_components, parse_components, unit_alpha},
};
use anyhow::Result;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslColor {
	hue: f32,
	saturation: f32,
	lightness: f32,
	alpha: u8,
}

impl Default for HslColor {
	fn default() -> Self {
		Self::new(0.0, 0.0, 0.0, 255)
	}
}

impl HslColor {
	/// Creates a color from raw components, wrapping the hue and clamping the rest.
	pub fn new(hue: f32, saturation: f32, lightness: f32, alpha: u8) -> Self {
		let c = clamp_components(hue, saturation, lightness, f32::from(alpha));
		Self {
			hue: c.hue,
			saturation: c.saturation,
			lightness: c.level,
			alpha: c.alpha,
		}
	}

	/// Like [`HslColor::new`], with the alpha given in `[0, 1]` and truncated.
	pub fn new_unit_alpha(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
		Self::new(hue, saturation, lightness, unit_alpha(alpha))
	}

	/// Parses `"H, S[%], L[%]"` or `"H, S[%], L[%], A[%]"`.
	///
	/// ```
	/// use huepick_core::HslColor;
	///
	/// let hsl = HslColor::parse_str("120, 100%, 50%").unwrap();
	/// assert_eq!(hsl.to_rgb().to_hex(), "#00FF00FF");
	/// assert!(HslColor::parse_str("120, 100%").is_err());
	/// ```
	pub fn parse_str(text: &str) -> Result<Self> {
		let c = parse_components(text)?;
		Ok(Self {
			hue: c.hue,
			saturation: c.saturation,
			lightness: c.level,
			alpha: c.alpha,
		})
	}

	pub fn from_rgb(rgb: RgbColor) -> Self {
		let Extrema { hue, max, min, delta } = Extrema::of(rgb);
		let lightness = (max + min) / 2.0;
		let saturation = if delta == 0.0 {
			0.0
		} else if lightness <= 0.5 {
			delta / (max + min)
		} else {
			delta / (2.0 - max - min)
		};
		Self::new(hue, saturation, lightness, rgb.a())
	}

	pub fn to_rgb(&self) -> RgbColor {
		let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
		rgb_from_chroma(self.hue, chroma, self.lightness - chroma / 2.0, self.alpha)
	}

	pub fn hue(&self) -> f32 {
		self.hue
	}

	pub fn saturation(&self) -> f32 {
		self.saturation
	}

	pub fn lightness(&self) -> f32 {
		self.lightness
	}

	pub fn alpha(&self) -> u8 {
		self.alpha
	}

	pub fn with_alpha(self, alpha: u8) -> Self {
		Self { alpha, ..self }
	}
}

impl fmt::Display for HslColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, {}%, {}%, {}",
			format_component(self.hue),
			format_component(self.saturation * 100.0),
			format_component(self.lightness * 100.0),
			self.alpha
		)
	}
}

impl FromStr for HslColor {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse_str(s)
	}
}

impl TryFrom<&str> for HslColor {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self> {
		Self::parse_str(value)
	}
}
