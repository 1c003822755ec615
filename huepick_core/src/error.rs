//! The error raised when color text cannot be parsed.
//!
//! Parsing functions return [`anyhow::Result`]; the underlying error is always a
//! [`FormatError`] and can be recovered with `downcast_ref`:
//!
//! ```
//! use huepick_core::{FormatError, HsvColor};
//!
//! let err = HsvColor::parse_str("1,2").unwrap_err();
//! assert_eq!(err.downcast_ref::<FormatError>(), Some(&FormatError::ComponentCount(2)));
//! ```

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
	/// The text did not split into three or four comma separated fields.
	ComponentCount(usize),
	/// A field is not a finite number, with or without a `%` suffix.
	InvalidNumber(String),
	/// A decimal RGB channel is not an integer between 0 and 255.
	InvalidChannel(String),
	/// A hex color has the wrong length or contains non-hex digits.
	InvalidHex(String),
}

impl fmt::Display for FormatError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use FormatError::*;
		match self {
			ComponentCount(count) => write!(f, "color must have exactly three or four components, found {count}"),
			InvalidNumber(text) => write!(f, "invalid number '{text}'"),
			InvalidChannel(text) => write!(f, "invalid channel '{text}': expected an integer between 0 and 255"),
			InvalidHex(text) => write!(f, "invalid hex color '{text}': expected 3, 4, 6, or 8 hex characters"),
		}
	}
}

impl std::error::Error for FormatError {}
