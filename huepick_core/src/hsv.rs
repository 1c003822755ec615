//! Hue, saturation and value.
//!
//! Value is the intensity of the strongest RGB channel, saturation the share
//! of it that is not shared by all three channels.
//!
//! The text form is `"H, S%, V%, A"`, the same grammar as [`crate::parse`]
//! accepts, so formatted colors can be copied and pasted back.
//!
//! # Examples
//!
//! ```
//! use huepick_core::{HsvColor, RgbColor};
//!
//! let hsv = HsvColor::parse_str("180, 50%, 75%, 200").unwrap();
//! assert_eq!(hsv.to_rgb(), RgbColor::new(96, 191, 191, 200));
//! assert_eq!(hsv.to_string(), "180, 50%, 75%, 200");
//! ```

use crate::{
	RgbColor,
	cylindrical::{Extrema, format_component, rgb_from_chroma},
	parse::{clamp_components, parse_components, unit_alpha},
};
use anyhow::Result;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvColor {
	hue: f32,
	saturation: f32,
	value: f32,
	alpha: u8,
}

impl Default for HsvColor {
	fn default() -> Self {
		Self::new(0.0, 0.0, 0.0, 255)
	}
}

impl HsvColor {
	/// Creates a color from raw components.
	///
	/// The hue wraps into `[0, 360)`, saturation and value are clamped into `[0, 1]`.
	///
	/// ```
	/// use huepick_core::HsvColor;
	///
	/// let hsv = HsvColor::new(-30.0, 1.5, 0.5, 255);
	/// assert_eq!((hsv.hue(), hsv.saturation(), hsv.value()), (330.0, 1.0, 0.5));
	/// ```
	pub fn new(hue: f32, saturation: f32, value: f32, alpha: u8) -> Self {
		let c = clamp_components(hue, saturation, value, f32::from(alpha));
		Self {
			hue: c.hue,
			saturation: c.saturation,
			value: c.level,
			alpha: c.alpha,
		}
	}

	/// Like [`HsvColor::new`], with the alpha given in `[0, 1]`.
	///
	/// The alpha is multiplied by 255 and truncated, so `0.5` becomes 127.
	pub fn new_unit_alpha(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
		Self::new(hue, saturation, value, unit_alpha(alpha))
	}

	/// Parses `"H, S[%], V[%]"` or `"H, S[%], V[%], A[%]"`.
	pub fn parse_str(text: &str) -> Result<Self> {
		let c = parse_components(text)?;
		Ok(Self {
			hue: c.hue,
			saturation: c.saturation,
			value: c.level,
			alpha: c.alpha,
		})
	}

	pub fn from_rgb(rgb: RgbColor) -> Self {
		let Extrema { hue, max, delta, .. } = Extrema::of(rgb);
		let saturation = if max == 0.0 { 0.0 } else { delta / max };
		Self::new(hue, saturation, max, rgb.a())
	}

	pub fn to_rgb(&self) -> RgbColor {
		let chroma = self.value * self.saturation;
		rgb_from_chroma(self.hue, chroma, self.value - chroma, self.alpha)
	}

	/// Degrees in `[0, 360)`.
	pub fn hue(&self) -> f32 {
		self.hue
	}

	pub fn saturation(&self) -> f32 {
		self.saturation
	}

	pub fn value(&self) -> f32 {
		self.value
	}

	pub fn alpha(&self) -> u8 {
		self.alpha
	}

	pub fn with_alpha(self, alpha: u8) -> Self {
		Self { alpha, ..self }
	}
}

impl fmt::Display for HsvColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}, {}%, {}%, {}",
			format_component(self.hue),
			format_component(self.saturation * 100.0),
			format_component(self.value * 100.0),
			self.alpha
		)
	}
}

impl FromStr for HsvColor {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse_str(s)
	}
}

impl TryFrom<&str> for HsvColor {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self> {
		Self::parse_str(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FormatError;
	use approx::assert_abs_diff_eq;
	use rand::{Rng, SeedableRng, rngs::StdRng};
	use rstest::rstest;

	fn assert_hsv(hsv: HsvColor, hue: f32, saturation: f32, value: f32, alpha: u8) {
		assert_abs_diff_eq!(hsv.hue(), hue, epsilon = 1e-3);
		assert_abs_diff_eq!(hsv.saturation(), saturation, epsilon = 1e-5);
		assert_abs_diff_eq!(hsv.value(), value, epsilon = 1e-5);
		assert_eq!(hsv.alpha(), alpha);
	}

	#[rstest]
	#[case::wrap_negative(-30.0, 330.0)]
	#[case::wrap_full_turns(720.0, 0.0)]
	#[case::wrap_exact(360.0, 0.0)]
	#[case::in_range(123.5, 123.5)]
	fn test_hue_wraparound(#[case] input: f32, #[case] expected: f32) {
		assert_eq!(HsvColor::new(input, 0.5, 0.5, 255).hue(), expected);
	}

	#[test]
	fn test_clamping() {
		assert_eq!(HsvColor::new(0.0, 1.5, 0.5, 255).saturation(), 1.0);
		assert_eq!(HsvColor::new(0.0, -0.2, 0.5, 255).saturation(), 0.0);
		assert_eq!(HsvColor::new(0.0, 0.5, 7.0, 255).value(), 1.0);
		assert_eq!(HsvColor::new(0.0, 0.5, -7.0, 255).value(), 0.0);
	}

	#[test]
	fn test_non_finite_components() {
		assert_hsv(HsvColor::new(f32::NAN, f32::NAN, f32::INFINITY, 9), 0.0, 0.0, 1.0, 9);
	}

	#[rstest]
	#[case(0.0, 0)]
	#[case(0.5, 127)]
	#[case(1.0, 255)]
	#[case(1.5, 255)]
	#[case(-0.5, 0)]
	fn test_unit_alpha(#[case] alpha: f32, #[case] expected: u8) {
		assert_eq!(HsvColor::new_unit_alpha(10.0, 0.5, 0.5, alpha).alpha(), expected);
	}

	#[test]
	fn test_red_round_trip() {
		let red = RgbColor::new(255, 0, 0, 255);
		let hsv = HsvColor::from_rgb(red);
		assert_eq!(hsv, HsvColor::new(0.0, 1.0, 1.0, 255));
		assert_eq!(hsv.to_rgb(), red);
	}

	#[rstest]
	#[case::black([0, 0, 0, 255], 0.0, 0.0, 0.0)]
	#[case::white([255, 255, 255, 255], 0.0, 0.0, 1.0)]
	#[case::gray([128, 128, 128, 255], 0.0, 0.0, 0.501_960_8)]
	#[case::green([0, 255, 0, 100], 120.0, 1.0, 1.0)]
	#[case::navy([0, 0, 128, 255], 240.0, 1.0, 0.501_960_8)]
	#[case::orange([255, 128, 0, 0], 30.117_647, 1.0, 1.0)]
	#[case::dusty([96, 191, 191, 200], 180.0, 0.497_382_2, 0.749_019_6)]
	fn test_from_rgb(#[case] rgba: [u8; 4], #[case] hue: f32, #[case] saturation: f32, #[case] value: f32) {
		let rgb = RgbColor::new(rgba[0], rgba[1], rgba[2], rgba[3]);
		let hsv = HsvColor::from_rgb(rgb);
		assert_hsv(hsv, hue, saturation, value, rgba[3]);
		assert_eq!(hsv.to_rgb(), rgb);
	}

	#[test]
	fn test_gray_has_no_saturation() {
		let hsv = HsvColor::from_rgb(RgbColor::rgb(128, 128, 128));
		assert_eq!(hsv.saturation(), 0.0);
		assert_eq!(hsv.hue(), 0.0);
		assert!(!hsv.hue().is_nan());
	}

	#[test]
	fn test_random_round_trip() {
		let mut rng = StdRng::seed_from_u64(0x4856);
		for _ in 0..1000 {
			let rgb = RgbColor::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen());
			let back = HsvColor::from_rgb(rgb).to_rgb();
			for (a, b) in rgb.into_rgba().iter().zip(back.into_rgba().iter()) {
				assert!(a.abs_diff(*b) <= 1, "{rgb} became {back}");
			}
			assert_eq!(rgb.a(), back.a());
		}
	}

	#[test]
	fn test_range_invariant() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..1000 {
			let hsv = HsvColor::new(
				rng.gen_range(-1000.0..1000.0),
				rng.gen_range(-2.0..2.0),
				rng.gen_range(-2.0..2.0),
				rng.r#gen(),
			);
			assert!(hsv.hue() >= 0.0 && hsv.hue() < 360.0, "{hsv}");
			assert!((0.0..=1.0).contains(&hsv.saturation()), "{hsv}");
			assert!((0.0..=1.0).contains(&hsv.value()), "{hsv}");
		}
	}

	#[test]
	fn test_parse_and_format() {
		let hsv = HsvColor::parse_str("180, 50%, 75%, 200").unwrap();
		assert_hsv(hsv, 180.0, 0.5, 0.75, 200);

		let text = hsv.to_string();
		assert_eq!(text, "180, 50%, 75%, 200");
		assert_eq!(text.parse::<HsvColor>().unwrap(), hsv);
	}

	#[test]
	fn test_parse_defaults_alpha() {
		let hsv = HsvColor::try_from("90, 0.25, 1").unwrap();
		assert_hsv(hsv, 90.0, 0.25, 1.0, 255);
	}

	#[test]
	fn test_format_parses_back() {
		let mut rng = StdRng::seed_from_u64(42);
		for _ in 0..200 {
			let rgb = RgbColor::new(rng.r#gen(), rng.r#gen(), rng.r#gen(), rng.r#gen());
			let hsv = HsvColor::from_rgb(rgb);
			let parsed = HsvColor::parse_str(&hsv.to_string()).unwrap();
			assert_hsv(parsed, hsv.hue(), hsv.saturation(), hsv.value(), hsv.alpha());
			assert_eq!(parsed.to_rgb(), hsv.to_rgb());
		}
	}

	#[rstest]
	#[case("1,2", FormatError::ComponentCount(2))]
	#[case("a,b,c", FormatError::InvalidNumber("a".into()))]
	#[case("10, 20%, 30%, 40%, 50%", FormatError::ComponentCount(5))]
	fn test_parse_invalid(#[case] text: &str, #[case] expected: FormatError) {
		let err = HsvColor::parse_str(text).unwrap_err();
		assert_eq!(err.downcast_ref::<FormatError>(), Some(&expected));
	}

	#[test]
	fn test_with_alpha() {
		let hsv = HsvColor::new(10.0, 0.5, 0.5, 255).with_alpha(3);
		assert_hsv(hsv, 10.0, 0.5, 0.5, 3);
		assert_eq!(hsv.to_rgb().a(), 3);
	}
}
