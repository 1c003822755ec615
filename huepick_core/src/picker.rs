//! Geometry of the hue/saturation picking surface.
//!
//! The surface maps the horizontal axis to hue (0° on the left edge, 360° on
//! the right) and the vertical axis to saturation (1 on the top edge, 0 on the
//! bottom, y grows downward). Event handling is left to the caller; this
//! module only converts between positions and components.
//!
//! # Examples
//!
//! ```
//! use huepick_core::PickerSurface;
//!
//! let surface = PickerSurface::new(360.0, 100.0);
//! assert_eq!(surface.hue_saturation_at(90.0, 25.0), Some((90.0, 0.75)));
//! assert_eq!(surface.position_of(90.0, 0.75), Some((90.0, 25.0)));
//! ```

use crate::HsvColor;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerSurface {
	width: f64,
	height: f64,
}

impl PickerSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	fn has_area(&self) -> bool {
		self.width > 0.0 && self.height > 0.0
	}

	/// Hue and saturation under a point, both clamped to the surface.
	///
	/// Returns `None` while the surface has no area.
	pub fn hue_saturation_at(&self, x: f64, y: f64) -> Option<(f32, f32)> {
		if !self.has_area() {
			return None;
		}
		let hue = (x / self.width * 360.0).clamp(0.0, 360.0);
		let saturation = (1.0 - y / self.height).clamp(0.0, 1.0);
		Some((hue as f32, saturation as f32))
	}

	/// The point that shows the given hue and saturation.
	pub fn position_of(&self, hue: f32, saturation: f32) -> Option<(f64, f64)> {
		if !self.has_area() {
			return None;
		}
		let x = f64::from(hue) / 360.0 * self.width;
		let y = (1.0 - f64::from(saturation)) * self.height;
		Some((x, y))
	}

	/// Top-left corner of a selector of the given size centered on the point
	/// for `hue` and `saturation`.
	pub fn selector_origin(
		&self,
		hue: f32,
		saturation: f32,
		selector_width: f64,
		selector_height: f64,
	) -> Option<(f64, f64)> {
		let (x, y) = self.position_of(hue, saturation)?;
		Some((x - selector_width / 2.0, y - selector_height / 2.0))
	}

	/// The color under a point for the given brightness.
	///
	/// A point on the right edge yields hue 360, which wraps to 0 like any other hue.
	pub fn color_at(&self, x: f64, y: f64, value: f32) -> Option<HsvColor> {
		let (hue, saturation) = self.hue_saturation_at(x, y)?;
		Some(HsvColor::new(hue, saturation, value, 255))
	}
}
