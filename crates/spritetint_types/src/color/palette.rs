//! Master and target palettes.
//!
//! Source art is authored with five fixed grayscale shades, the master
//! palette. A target palette supplies one replacement color for each master
//! shade, matched by position.
//!
//! | Index | Master shade   | RGB             |
//! |-------|----------------|-----------------|
//! | 0     | white          | 255, 255, 255   |
//! | 1     | mid-gray       | 124, 124, 125   |
//! | 2     | light-gray     | 167, 167, 168   |
//! | 3     | lighter-gray   | 180, 180, 180   |
//! | 4     | black          | 0, 0, 0         |

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Rgb;
use crate::error::SpriteError;

/// Number of colors in both the master and target palettes
pub const PALETTE_SIZE: usize = 5;

/// Grayscale shades recognized in source art, in match order.
pub const MASTER_PALETTE: [Rgb; PALETTE_SIZE] = [
	Rgb::new(255, 255, 255),
	Rgb::new(124, 124, 125),
	Rgb::new(167, 167, 168),
	Rgb::new(180, 180, 180),
	Rgb::new(0, 0, 0),
];

/// Replacement colors, one per master shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TargetPalette {
	colors: [Rgb; PALETTE_SIZE],
}

impl TargetPalette {
	/// Creates a target palette from five colors.
	pub const fn new(colors: [Rgb; PALETTE_SIZE]) -> Self {
		Self {
			colors,
		}
	}

	/// Palette that maps every master shade onto itself.
	pub const fn identity() -> Self {
		Self::new(MASTER_PALETTE)
	}

	/// Parses a palette from hex strings.
	///
	/// All entries are parsed before anything else happens, so a bad entry
	/// aborts the whole palette.
	///
	/// # Errors
	///
	/// - [`SpriteError::PaletteSize`] if `inputs` does not hold exactly five entries
	/// - [`SpriteError::InvalidHexColor`] naming the first malformed entry
	pub fn from_hex_strs<S: AsRef<str>>(inputs: &[S]) -> Result<Self, SpriteError> {
		if inputs.len() != PALETTE_SIZE {
			return Err(SpriteError::PaletteSize {
				expected: PALETTE_SIZE,
				actual: inputs.len(),
			});
		}

		let mut colors = [Rgb::default(); PALETTE_SIZE];
		for (slot, input) in colors.iter_mut().zip(inputs) {
			*slot = Rgb::from_hex(input.as_ref())?;
		}

		Ok(Self::new(colors))
	}

	/// Parses a comma-separated list of five hex colors.
	pub fn from_csv(input: &str) -> Result<Self, SpriteError> {
		let parts: Vec<&str> = input.split(',').collect();
		Self::from_hex_strs(parts.as_slice())
	}

	/// Returns the replacement for master index `index`.
	#[inline]
	pub fn get(&self, index: usize) -> Option<Rgb> {
		self.colors.get(index).copied()
	}
}

impl Default for TargetPalette {
	fn default() -> Self {
		Self::identity()
	}
}

impl fmt::Display for TargetPalette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, color) in self.colors.iter().enumerate() {
			if i > 0 {
				write!(f, ",")?;
			}
			write!(f, "{color}")?;
		}
		Ok(())
	}
}

impl std::ops::Index<usize> for TargetPalette {
	type Output = Rgb;

	fn index(&self, index: usize) -> &Self::Output {
		&self.colors[index]
	}
}

/// Named target palette stored as JSON.
///
/// ```json
/// {
///   "name": "forest",
///   "colors": ["#E8F5E9", "#2E7D32", "#66BB6A", "#A5D6A7", "#1B1B1B"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalettePreset {
	/// Display name of the preset
	#[serde(default)]
	pub name: String,
	/// Hex strings, one per master shade
	pub colors: Vec<String>,
}

impl PalettePreset {
	/// Loads a preset from a JSON file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpriteError> {
		let json = std::fs::read_to_string(path)?;
		Self::from_json(&json)
	}

	/// Parses a preset from a JSON string.
	pub fn from_json(json: &str) -> Result<Self, SpriteError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Validates the colors and returns the target palette.
	pub fn palette(&self) -> Result<TargetPalette, SpriteError> {
		TargetPalette::from_hex_strs(self.colors.as_slice())
	}
}
