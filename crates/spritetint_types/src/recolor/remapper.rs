//! Per-pixel palette remapping.

use image::{Rgba, RgbaImage};

use crate::color::{MASTER_PALETTE, TargetPalette};

/// Maps master shades to a target palette.
///
/// # Pixel Rule
///
/// - Alpha 0: left untouched, even when the RGB matches a master shade
/// - Otherwise the first master shade with an exact RGB match is replaced by
///   the target color at the same index, keeping the pixel's alpha
/// - Any other color passes through unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remapper {
	palette: TargetPalette,
}

impl Remapper {
	/// Creates a remapper for `palette`.
	pub const fn new(palette: TargetPalette) -> Self {
		Self {
			palette,
		}
	}

	/// Returns the master index matched by `pixel`, if any.
	pub fn match_index(&self, pixel: &Rgba<u8>) -> Option<usize> {
		if pixel.0[3] == 0 {
			return None;
		}
		MASTER_PALETTE.iter().position(|master| master.matches(pixel))
	}

	/// Applies the pixel rule to a single pixel.
	#[inline]
	pub fn map_pixel(&self, pixel: Rgba<u8>) -> Rgba<u8> {
		match self.match_index(&pixel) {
			Some(index) => self.palette[index].with_alpha(pixel.0[3]),
			None => pixel,
		}
	}

	/// Returns a recolored copy of `image`.
	pub fn apply(&self, image: &RgbaImage) -> RgbaImage {
		let mut output = image.clone();
		self.apply_in_place(&mut output);
		output
	}

	/// Recolors `image` in place and returns the number of pixels changed.
	pub fn apply_in_place(&self, image: &mut RgbaImage) -> usize {
		let mut changed = 0;
		for pixel in image.pixels_mut() {
			let mapped = self.map_pixel(*pixel);
			if mapped != *pixel {
				*pixel = mapped;
				changed += 1;
			}
		}
		changed
	}
}

impl Default for Remapper {
	fn default() -> Self {
		Self::new(TargetPalette::identity())
	}
}
