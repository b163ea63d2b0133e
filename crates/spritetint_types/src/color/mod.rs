//! Color support.
//!
//! This module provides the RGB triple used by both palettes, along with
//! parsing from the six-digit hex notation users type into the tool.
//!
//! # Hex Notation
//!
//! - Exactly six hex digits, case-insensitive
//! - One optional leading `#`
//! - Surrounding whitespace is ignored
//!
//! ```
//! use spritetint_types::color::Rgb;
//!
//! assert_eq!(Rgb::from_hex("#112233").unwrap(), Rgb::new(0x11, 0x22, 0x33));
//! assert!(Rgb::from_hex("#ABC").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Serialize, Serializer};

use crate::error::SpriteError;

pub mod palette;

pub use palette::{MASTER_PALETTE, PALETTE_SIZE, PalettePreset, TargetPalette};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
}

impl Rgb {
	/// Creates a new RGB color.
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self {
			r,
			g,
			b,
		}
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::new(value, value, value)
	}

	/// Parses a color from six hex digits, optionally prefixed with `#`.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::InvalidHexColor`] carrying the original input if
	/// the digits are not exactly six hex characters after stripping.
	pub fn from_hex(input: &str) -> Result<Self, SpriteError> {
		let digits = input.trim();
		let digits = digits.strip_prefix('#').unwrap_or(digits);

		let mut bytes = [0u8; 3];
		if digits.len() != 6 || hex::decode_to_slice(digits, &mut bytes).is_err() {
			return Err(SpriteError::InvalidHexColor(input.to_string()));
		}

		Ok(Self::new(bytes[0], bytes[1], bytes[2]))
	}

	/// Returns the color as `#RRGGBB` with uppercase digits.
	pub fn to_hex(&self) -> String {
		format!("#{}", hex::encode_upper([self.r, self.g, self.b]))
	}

	/// Returns true if the RGB channels of `pixel` equal this color.
	#[inline]
	pub fn matches(&self, pixel: &Rgba<u8>) -> bool {
		let [r, g, b, _] = pixel.0;
		self.r == r && self.g == g && self.b == b
	}

	/// Returns this color with the given alpha.
	#[inline]
	pub const fn with_alpha(&self, a: u8) -> Rgba<u8> {
		Rgba([self.r, self.g, self.b, a])
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_hex())
	}
}

impl FromStr for Rgb {
	type Err = SpriteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

impl From<(u8, u8, u8)> for Rgb {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		Self::new(r, g, b)
	}
}

impl Serialize for Rgb {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_hex())
	}
}
