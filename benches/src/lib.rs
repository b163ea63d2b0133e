//! Benchmark helper utilities for spritetint
//!
//! This module generates synthetic sprite art for the benchmark suite so that
//! no image files need to be checked in.

use image::{Rgba, RgbaImage};
use spritetint_types::color::MASTER_PALETTE;

/// Generates a sheet of grayscale sprite art.
///
/// Pixels cycle through the five master shades, an off-palette edge color and
/// a fully transparent pixel, so every branch of the remapper is exercised.
pub fn generate_gray_sheet(width: u32, height: u32) -> RgbaImage {
	RgbaImage::from_fn(width, height, |x, y| {
		let slot = ((x + y * 3) % 7) as usize;
		match slot {
			0..=4 => MASTER_PALETTE[slot].with_alpha(255),
			5 => Rgba([140, 140, 141, 255]),
			_ => Rgba([0, 0, 0, 0]),
		}
	})
}

/// Generates `count` solid frames of `size` x `size` with distinct colors.
pub fn generate_frames(count: usize, size: u32) -> Vec<RgbaImage> {
	(0..count)
		.map(|i| {
			let shade = (i % 256) as u8;
			RgbaImage::from_pixel(size, size, Rgba([shade, shade.wrapping_mul(3), 255 - shade, 255]))
		})
		.collect()
}
