//! Parsing and normalisation of the raw components shared by HSV and HSL.
//!
//! Both cylindrical color types accept the same text grammar:
//!
//! ```text
//! H[%], S[%], V_or_L[%][, A[%]]
//! ```
//!
//! A `%` suffix divides the number by 100 and multiplies it by the scale of
//! the field: 360 for the hue, 1 for saturation and value/lightness, 255 for
//! alpha. A missing alpha field means fully opaque.
//!
//! # Examples
//!
//! ```
//! use huepick_core::parse::parse_components;
//!
//! let c = parse_components("90, 50%, 0.25, 50%").unwrap();
//! assert_eq!((c.hue, c.saturation, c.level, c.alpha), (90.0, 0.5, 0.25, 127));
//! ```

use crate::FormatError;
use anyhow::{Result, bail};

/// Raw components in canonical ranges, before they become an HSV or HSL color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components {
	/// Degrees in `[0, 360)`.
	pub hue: f32,
	/// `[0, 1]`
	pub saturation: f32,
	/// Value for HSV, lightness for HSL; `[0, 1]`.
	pub level: f32,
	pub alpha: u8,
}

/// Parses a number that may carry a `%` suffix.
///
/// With the suffix the number is divided by 100 and multiplied by `scale`,
/// without it the number is returned as written.
///
/// # Examples
///
/// ```
/// use huepick_core::parse::parse_percentage;
///
/// assert_eq!(parse_percentage("50%", 1.0).unwrap(), 0.5);
/// assert_eq!(parse_percentage("50%", 360.0).unwrap(), 180.0);
/// assert_eq!(parse_percentage("0.5", 360.0).unwrap(), 0.5);
/// assert!(parse_percentage("half", 1.0).is_err());
/// ```
pub fn parse_percentage(text: &str, scale: f32) -> Result<f32> {
	let text = text.trim();
	let (numeral, is_percentage) = match text.strip_suffix('%') {
		Some(rest) => (rest.trim_end(), true),
		None => (text, false),
	};

	let value = match numeral.parse::<f32>() {
		Ok(value) if value.is_finite() => value,
		_ => bail!(FormatError::InvalidNumber(text.to_string())),
	};

	Ok(if is_percentage { value / 100.0 * scale } else { value })
}

/// Splits color text into its three or four fields and normalises them.
///
/// Fails with [`FormatError::ComponentCount`] when the field count is wrong and
/// with [`FormatError::InvalidNumber`] when a field is not a number.
pub fn parse_components(text: &str) -> Result<Components> {
	log::trace!("parse components from {text:?}");

	let parts: Vec<&str> = text.trim().split(',').map(str::trim).collect();
	if parts.len() != 3 && parts.len() != 4 {
		bail!(FormatError::ComponentCount(parts.len()));
	}

	let hue = parse_percentage(parts[0], 360.0)?;
	let saturation = parse_percentage(parts[1], 1.0)?;
	let level = parse_percentage(parts[2], 1.0)?;
	let alpha = match parts.get(3) {
		Some(part) => parse_percentage(part, 255.0)?,
		None => 255.0,
	};

	Ok(clamp_components(hue, saturation, level, alpha))
}

/// Brings arbitrary numbers into the canonical ranges.
///
/// The hue wraps around, saturation and level are clamped into `[0, 1]` and
/// the alpha is truncated to an integer and clamped into `[0, 255]`.
pub fn clamp_components(hue: f32, saturation: f32, level: f32, alpha: f32) -> Components {
	Components {
		hue: wrap_hue(hue),
		saturation: clamp_unit(saturation),
		level: clamp_unit(level),
		alpha: truncate_alpha(alpha),
	}
}

/// Wraps a hue in degrees into `[0, 360)`. Non-finite hues become 0.
pub fn wrap_hue(hue: f32) -> f32 {
	if !hue.is_finite() {
		return 0.0;
	}
	// the second modulo folds sums that round up to exactly 360
	((hue % 360.0) + 360.0) % 360.0
}

/// Clamps into `[0, 1]`. NaN becomes 0.
pub fn clamp_unit(value: f32) -> f32 {
	if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Truncates toward zero and clamps into `[0, 255]`. NaN becomes 0.
pub fn truncate_alpha(alpha: f32) -> u8 {
	alpha.clamp(0.0, 255.0) as u8
}

/// Converts an alpha in `[0, 1]` into `[0, 255]`, truncating.
pub fn unit_alpha(alpha: f32) -> u8 {
	truncate_alpha(alpha * 255.0)
}
