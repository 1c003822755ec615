//! A common interface over the three color representations.
//!
//! Every conversion goes through [`RgbColor`], so any representation can be
//! turned into any other with [`ColorSpace::convert`]:
//!
//! ```
//! use huepick_core::{ColorSpace, HslColor, HsvColor, RgbColor};
//!
//! let hsv = HsvColor::new(120.0, 1.0, 1.0, 255);
//! let hsl: HslColor = hsv.convert();
//! assert_eq!(hsl.lightness(), 0.5);
//! assert_eq!(hsl.convert::<RgbColor>(), RgbColor::rgb(0, 255, 0));
//! ```

use crate::{HslColor, HsvColor, RgbColor};
use anyhow::Result;
use std::fmt::{Debug, Display};

pub trait ColorSpace: Copy + Debug + Display {
	/// Short lower case name, e.g. `"hsv"`.
	const NAME: &'static str;

	fn from_rgb(rgb: RgbColor) -> Self;

	fn to_rgb(&self) -> RgbColor;

	/// Parses the text form written by `Display`.
	fn parse_str(text: &str) -> Result<Self>;

	fn convert<T: ColorSpace>(&self) -> T {
		T::from_rgb(self.to_rgb())
	}
}

impl ColorSpace for RgbColor {
	const NAME: &'static str = "rgb";

	fn from_rgb(rgb: RgbColor) -> Self {
		rgb
	}

	fn to_rgb(&self) -> RgbColor {
		*self
	}

	fn parse_str(text: &str) -> Result<Self> {
		RgbColor::parse_str(text)
	}
}

impl ColorSpace for HsvColor {
	const NAME: &'static str = "hsv";

	fn from_rgb(rgb: RgbColor) -> Self {
		HsvColor::from_rgb(rgb)
	}

	fn to_rgb(&self) -> RgbColor {
		HsvColor::to_rgb(self)
	}

	fn parse_str(text: &str) -> Result<Self> {
		HsvColor::parse_str(text)
	}
}

impl ColorSpace for HslColor {
	const NAME: &'static str = "hsl";

	fn from_rgb(rgb: RgbColor) -> Self {
		HslColor::from_rgb(rgb)
	}

	fn to_rgb(&self) -> RgbColor {
		HslColor::to_rgb(self)
	}

	fn parse_str(text: &str) -> Result<Self> {
		HslColor::parse_str(text)
	}
}
