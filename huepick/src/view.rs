//! Text shown to the user for a color.

use crate::config::DisplayConfig;
use huepick_core::{HsvColor, RgbColor};

/// `#RRGGBBAA` in the configured case.
pub fn hex(rgb: RgbColor, display: &DisplayConfig) -> String {
	let hex = rgb.to_hex();
	if display.uppercase_hex { hex } else { hex.to_lowercase() }
}

/// Two lines: the hex form of the color, then `H, S%, V%` with the
/// configured number of decimals.
pub fn summary(hsv: HsvColor, display: &DisplayConfig) -> String {
	let precision = display.decimals;
	format!(
		"{}\n{:.precision$}, {:.precision$}%, {:.precision$}%",
		hex(hsv.to_rgb(), display),
		hsv.hue(),
		hsv.saturation() * 100.0,
		hsv.value() * 100.0,
	)
}
