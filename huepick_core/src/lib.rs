//! Color model for the huepick color picker.
//!
//! Contains the three color representations used by the picker and the
//! conversions and text forms that connect them:
//! - [`RgbColor`]: 8-bit channels plus alpha, the hub every conversion passes through
//! - [`HsvColor`]: hue, saturation and value
//! - [`HslColor`]: hue, saturation and lightness
//!
//! ## Usage Example
//!
//! ```rust
//! use huepick_core::{HslColor, HsvColor, RgbColor};
//!
//! let red = RgbColor::rgb(255, 0, 0);
//! let hsv = HsvColor::from_rgb(red);
//! assert_eq!(hsv.to_string(), "0, 100%, 100%, 255");
//!
//! let teal = HslColor::parse_str("180, 100%, 25%").unwrap();
//! assert_eq!(teal.to_rgb(), RgbColor::rgb(0, 128, 128));
//! ```

mod cylindrical;
pub mod error;
pub mod hsl;
pub mod hsv;
pub mod parse;
pub mod picker;
pub mod rgb;
pub mod space;

pub use error::FormatError;
pub use hsl::HslColor;
pub use hsv::HsvColor;
pub use parse::Components;
pub use picker::PickerSurface;
pub use rgb::RgbColor;
pub use space::ColorSpace;
