//! Optional YAML configuration.
//!
//! Every field has a default, so an empty file, or no file at all, is a valid
//! configuration:
//!
//! ```yaml
//! display:
//!   decimals: 2          # decimals in the picker summary
//!   uppercase_hex: true  # "#FF5733FF" rather than "#ff5733ff"
//! picker:
//!   width: 360           # size of the picking surface
//!   height: 100
//! ```

use anyhow::{Context, Result, ensure};
use huepick_core::PickerSurface;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// How colors are printed
	#[serde(default)]
	pub display: DisplayConfig,

	/// Size of the picking surface used by `huepick pick`
	#[serde(default)]
	pub picker: PickerConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DisplayConfig {
	pub decimals: usize,
	pub uppercase_hex: bool,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			decimals: 2,
			uppercase_hex: true,
		}
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PickerConfig {
	pub width: f64,
	pub height: f64,
}

impl Default for PickerConfig {
	fn default() -> Self {
		Self {
			width: 360.0,
			height: 100.0,
		}
	}
}

impl PickerConfig {
	pub fn surface(&self) -> PickerSurface {
		PickerSurface::new(self.width, self.height)
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		log::debug!("read config {path:?}");
		let file = File::open(path).with_context(|| format!("could not open config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("invalid config file {path:?}"))
	}

	fn validate(&self) -> Result<()> {
		ensure!(
			self.display.decimals <= 6,
			"display.decimals must be between 0 and 6, got {}",
			self.display.decimals
		);
		ensure!(
			self.picker.width > 0.0 && self.picker.height > 0.0,
			"picker.width and picker.height must be positive, got {}x{}",
			self.picker.width,
			self.picker.height
		);
		Ok(())
	}
}
