//! The 8-bit RGB color every other representation converts through.
//!
//! # Text forms
//!
//! [`RgbColor::parse_str`] accepts:
//! - decimal channels: `"R, G, B"` or `"R, G, B, A"` with integers 0–255
//! - hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//!
//! `Display` writes the decimal form with all four channels, [`RgbColor::to_hex`]
//! writes `#RRGGBBAA`. Both parse back to the same color.
//!
//! # Examples
//!
//! ```
//! use huepick_core::RgbColor;
//!
//! let color = RgbColor::parse_str("#FF573380").unwrap();
//! assert_eq!(color, RgbColor::new(255, 87, 51, 128));
//! assert_eq!(color.to_string(), "255, 87, 51, 128");
//! assert_eq!(color.to_hex(), "#FF573380");
//! ```

use crate::FormatError;
use anyhow::{Result, bail};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RgbColor {
	r: u8,
	g: u8,
	b: u8,
	a: u8,
}

impl Default for RgbColor {
	fn default() -> Self {
		Self::rgb(0, 0, 0)
	}
}

impl RgbColor {
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Fully opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 255 }
	}

	pub fn r(&self) -> u8 {
		self.r
	}

	pub fn g(&self) -> u8 {
		self.g
	}

	pub fn b(&self) -> u8 {
		self.b
	}

	pub fn a(&self) -> u8 {
		self.a
	}

	pub fn with_alpha(self, a: u8) -> Self {
		Self { a, ..self }
	}

	pub fn into_rgba(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}

	/// Channels scaled into `[0, 1]`, alpha left out.
	pub(crate) fn unit_channels(self) -> [f32; 3] {
		[
			f32::from(self.r) / 255.0,
			f32::from(self.g) / 255.0,
			f32::from(self.b) / 255.0,
		]
	}

	/// `#RRGGBBAA`, upper case.
	pub fn to_hex(&self) -> String {
		format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
	}

	/// `#RRGGBB`, upper case, alpha dropped.
	pub fn to_hex_rgb(&self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}

	/// Parses the decimal or the hex text form, see the module documentation.
	pub fn parse_str(text: &str) -> Result<Self> {
		let text = text.trim();
		if let Some(hex) = text.strip_prefix('#') {
			return parse_hex(hex);
		}
		parse_decimal(text)
	}
}

/// Parses the digits of a hex color, without the leading `#`.
///
/// 3 and 4 digit forms are expanded by repeating every digit.
fn parse_hex(hex: &str) -> Result<RgbColor> {
	let invalid = || FormatError::InvalidHex(hex.to_string());

	if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
		bail!(invalid());
	}

	let expanded = match hex.len() {
		3 | 4 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
		6 | 8 => hex.to_string(),
		_ => bail!(invalid()),
	};

	let mut channels = [255u8; 4];
	for (channel, i) in channels.iter_mut().zip((0..expanded.len()).step_by(2)) {
		*channel = u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid())?;
	}

	let [r, g, b, a] = channels;
	Ok(RgbColor::new(r, g, b, a))
}

fn parse_decimal(text: &str) -> Result<RgbColor> {
	let parts: Vec<&str> = text.split(',').map(str::trim).collect();
	if parts.len() != 3 && parts.len() != 4 {
		bail!(FormatError::ComponentCount(parts.len()));
	}

	let mut channels = [255u8; 4];
	for (channel, part) in channels.iter_mut().zip(&parts) {
		*channel = match part.parse::<u8>() {
			Ok(value) => value,
			Err(_) => bail!(FormatError::InvalidChannel((*part).to_string())),
		};
	}

	let [r, g, b, a] = channels;
	Ok(RgbColor::new(r, g, b, a))
}

impl fmt::Display for RgbColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
	}
}

impl FromStr for RgbColor {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse_str(s)
	}
}

impl TryFrom<&str> for RgbColor {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self> {
		Self::parse_str(value)
	}
}
