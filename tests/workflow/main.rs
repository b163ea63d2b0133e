//! End-to-end workflow tests for `spritetint`

mod recolor;
mod sheet;

use std::path::Path;

use image::{Rgba, RgbaImage};

/// Writes a `size` x `size` frame filled with `color`.
pub(crate) fn write_frame(dir: &Path, name: &str, size: u32, color: [u8; 4]) {
	RgbaImage::from_pixel(size, size, Rgba(color)).save(dir.join(name)).unwrap();
}

/// Loads a PNG as RGBA.
pub(crate) fn open_rgba(path: &Path) -> RgbaImage {
	image::open(path).unwrap().into_rgba8()
}
