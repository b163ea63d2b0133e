//! Sprite sheet building.
//!
//! A sheet tiles every PNG frame in a folder onto one transparent canvas.
//!
//! # Layout
//!
//! - The first frame (in filename order) defines the cell size
//! - `rows = ceil(frames / columns)`
//! - Frame `i` is placed at `(i % columns * (w + padding), i / columns * (h + padding))`
//! - Padding is trailing space after each frame; unused cells stay transparent
//!
//! # Frame Order
//!
//! Frames are sorted by filename in ascending byte order. Numbered frames need
//! zero-padded names (`frame02.png` before `frame10.png`), because `frame10.png`
//! sorts before `frame2.png`.
//!
//! # Example
//!
//! ```no_run
//! use spritetint_types::sheet::{SheetOptions, build_sheet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = build_sheet(&SheetOptions {
//!     folder: "walk_cycle".into(),
//!     output_name: "spritesheet".to_string(),
//!     columns: 4,
//!     padding: 2,
//! })?;
//! println!("{} frames -> {}", summary.frame_count, summary.output.display());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;

use crate::error::SpriteError;
use crate::frames;

pub mod layout;

pub use layout::{SheetLayout, blank_sheet, paste_frame, tile_frames};

/// Default output filename used when none is given
pub const DEFAULT_SHEET_NAME: &str = "spritesheet.png";

/// Inputs for a sheet build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetOptions {
	/// Folder containing the frames; the sheet is written here too
	pub folder: PathBuf,
	/// Output filename, `.png` is appended when missing
	pub output_name: String,
	/// Number of grid columns (at least one)
	pub columns: u32,
	/// Trailing pixels after each frame
	pub padding: u32,
}

impl Default for SheetOptions {
	fn default() -> Self {
		Self {
			folder: PathBuf::new(),
			output_name: DEFAULT_SHEET_NAME.to_string(),
			columns: 1,
			padding: 0,
		}
	}
}

/// Result of a successful sheet build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
	/// Path of the written sheet
	pub output: PathBuf,
	/// Number of frames tiled
	pub frame_count: usize,
	/// Grid geometry of the sheet
	pub layout: SheetLayout,
}

/// Builds a sheet from the PNG frames in `options.folder`.
///
/// The output file is excluded from the frames, both as typed and with `.png`
/// appended, so rebuilding in place never tiles a previous sheet.
///
/// # Errors
///
/// - [`SpriteError::InvalidFolder`] if the folder does not exist
/// - [`SpriteError::MissingOutputName`] if the output name is blank
/// - [`SpriteError::InvalidColumns`] if `columns` is zero
/// - [`SpriteError::NoFramesFound`] if the folder holds no other PNGs
/// - [`SpriteError::SheetTooLarge`] if the grid does not fit an image
/// - decode or encode failures; nothing is written in that case
pub fn build_sheet(options: &SheetOptions) -> Result<SheetSummary, SpriteError> {
	let folder = options.folder.as_path();
	frames::ensure_folder(folder)?;

	let typed_name = options.output_name.trim();
	let output_name = frames::normalize_output_name(typed_name)?;

	if options.columns == 0 {
		return Err(SpriteError::InvalidColumns(options.columns));
	}

	let names = frames::list_pngs(folder, &[typed_name, output_name.as_str()])?;
	let Some(first_name) = names.first() else {
		return Err(SpriteError::NoFramesFound(folder.to_path_buf()));
	};

	let first = frames::load_rgba(&folder.join(first_name))?;
	let layout = SheetLayout::new(
		first.width(),
		first.height(),
		names.len() as u32,
		options.columns,
		options.padding,
	)?;
	debug!("Sheet layout: {layout}");

	let mut sheet = blank_sheet(&layout);
	paste_frame(&mut sheet, &layout, 0, &first);
	drop(first);

	for (index, name) in names.iter().enumerate().skip(1) {
		let frame = frames::load_rgba(&folder.join(name))?;
		paste_frame(&mut sheet, &layout, index as u32, &frame);
	}

	let output = folder.join(&output_name);
	sheet.save(&output)?;
	info!("Sprite sheet created: {} ({} frames)", output.display(), names.len());

	Ok(SheetSummary {
		output,
		frame_count: names.len(),
		layout,
	})
}
