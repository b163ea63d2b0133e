//! Sheet grid geometry and tiling.

use std::fmt;

use image::{RgbaImage, imageops};
use log::warn;
use serde::Serialize;

use crate::error::SpriteError;

/// Grid geometry of a sheet.
///
/// Every cell is `cell_width + padding` wide and `cell_height + padding`
/// tall. Padding is trailing space after each frame, so the first frame sits
/// flush with the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetLayout {
	/// Frame width, taken from the first frame
	pub cell_width: u32,
	/// Frame height, taken from the first frame
	pub cell_height: u32,
	/// Trailing space after each frame on both axes
	pub padding: u32,
	/// Number of grid columns
	pub columns: u32,
	/// Number of grid rows
	pub rows: u32,
	/// Number of frames placed on the grid
	pub frame_count: u32,
	/// Sheet width in pixels
	pub width: u32,
	/// Sheet height in pixels
	pub height: u32,
}

impl SheetLayout {
	/// Computes the grid for `frame_count` frames of `cell_width` x `cell_height`.
	///
	/// # Errors
	///
	/// - [`SpriteError::InvalidColumns`] if `columns` is zero
	/// - [`SpriteError::SheetTooLarge`] if the sheet size does not fit an image
	pub fn new(
		cell_width: u32,
		cell_height: u32,
		frame_count: u32,
		columns: u32,
		padding: u32,
	) -> Result<Self, SpriteError> {
		if columns == 0 {
			return Err(SpriteError::InvalidColumns(columns));
		}

		let rows = frame_count.div_ceil(columns);
		let too_large = || SpriteError::SheetTooLarge {
			columns,
			rows,
		};

		let width = cell_width
			.checked_add(padding)
			.and_then(|stride| stride.checked_mul(columns))
			.ok_or_else(too_large)?;
		let height = cell_height
			.checked_add(padding)
			.and_then(|stride| stride.checked_mul(rows))
			.ok_or_else(too_large)?;

		// RGBA buffer length must fit in memory addressing
		usize::try_from(width)
			.ok()
			.zip(usize::try_from(height).ok())
			.and_then(|(w, h)| w.checked_mul(h))
			.and_then(|pixels| pixels.checked_mul(4))
			.ok_or_else(too_large)?;

		Ok(Self {
			cell_width,
			cell_height,
			padding,
			columns,
			rows,
			frame_count,
			width,
			height,
		})
	}

	/// Horizontal distance between cell origins.
	#[inline]
	pub fn stride_x(&self) -> u32 {
		self.cell_width.saturating_add(self.padding)
	}

	/// Vertical distance between cell origins.
	#[inline]
	pub fn stride_y(&self) -> u32 {
		self.cell_height.saturating_add(self.padding)
	}

	/// Returns the sheet size as `(width, height)`.
	#[inline]
	pub fn sheet_size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	/// Returns the top-left corner of cell `index` in row-major order.
	///
	/// Cells past the last row saturate at `u32::MAX`.
	pub fn cell_origin(&self, index: u32) -> (u32, u32) {
		let col = index % self.columns;
		let row = index / self.columns;
		(col.saturating_mul(self.stride_x()), row.saturating_mul(self.stride_y()))
	}
}

impl fmt::Display for SheetLayout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (width, height) = self.sheet_size();
		write!(
			f,
			"{}x{} grid of {}x{} cells (+{} px) -> {}x{}",
			self.columns, self.rows, self.cell_width, self.cell_height, self.padding, width, height
		)
	}
}

/// Creates a fully transparent canvas for `layout`.
pub fn blank_sheet(layout: &SheetLayout) -> RgbaImage {
	let (width, height) = layout.sheet_size();
	RgbaImage::new(width, height)
}

/// Copies `frame` into cell `index` of `sheet`.
///
/// The frame overwrites the destination, alpha included. Parts that fall
/// outside the sheet are clipped.
pub fn paste_frame(sheet: &mut RgbaImage, layout: &SheetLayout, index: u32, frame: &RgbaImage) {
	if frame.dimensions() != (layout.cell_width, layout.cell_height) {
		warn!(
			"Frame {} is {}x{}, expected {}x{}; it will overlap or leave gaps",
			index,
			frame.width(),
			frame.height(),
			layout.cell_width,
			layout.cell_height
		);
	}

	let (x, y) = layout.cell_origin(index);
	imageops::replace(sheet, frame, i64::from(x), i64::from(y));
}

/// Tiles in-memory frames into a sheet.
///
/// The first frame defines the cell size.
///
/// # Errors
///
/// - [`SpriteError::NoFramesToTile`] if `frames` is empty
/// - [`SpriteError::InvalidColumns`] if `columns` is zero
/// - [`SpriteError::SheetTooLarge`] if the grid does not fit an image
pub fn tile_frames(
	frames: &[RgbaImage],
	columns: u32,
	padding: u32,
) -> Result<(RgbaImage, SheetLayout), SpriteError> {
	let Some(first) = frames.first() else {
		return Err(SpriteError::NoFramesToTile);
	};

	let frame_count = u32::try_from(frames.len()).map_err(|_| SpriteError::SheetTooLarge {
		columns,
		rows: u32::MAX,
	})?;
	let layout = SheetLayout::new(first.width(), first.height(), frame_count, columns, padding)?;
	let mut sheet = blank_sheet(&layout);

	for (index, frame) in frames.iter().enumerate() {
		paste_frame(&mut sheet, &layout, index as u32, frame);
	}

	Ok((sheet, layout))
}
