//! Error types for sheet building and palette remapping.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a sheet or recoloring images.
///
/// Every variant is terminal for the operation that produced it; source
/// images are never modified when an error is returned.
#[derive(Debug, Error)]
pub enum SpriteError {
	/// The folder does not exist or is not a directory
	#[error("invalid folder: {}", .0.display())]
	InvalidFolder(PathBuf),

	/// The input image does not exist or is not a file
	#[error("invalid input image: {}", .0.display())]
	InvalidInput(PathBuf),

	/// The output filename is empty
	#[error("missing output name")]
	MissingOutputName,

	/// Column count is below one
	#[error("invalid column count {0}: at least one column is required")]
	InvalidColumns(u32),

	/// No frames available to tile
	#[error("no frames found in {}", .0.display())]
	NoFramesFound(PathBuf),

	/// An in-memory frame list is empty
	#[error("no frames to tile")]
	NoFramesToTile,

	/// The sheet dimensions do not fit in an image
	#[error("sheet of {columns}x{rows} cells is too large")]
	SheetTooLarge {
		/// Grid columns requested
		columns: u32,
		/// Grid rows required
		rows: u32,
	},

	/// No PNG files available to recolor
	#[error("no PNGs found in {}", .0.display())]
	NoPngsFound(PathBuf),

	/// A color string is not exactly six hex digits
	#[error("invalid hex color: {0:?}")]
	InvalidHexColor(String),

	/// Wrong number of palette entries
	#[error("palette size mismatch: expected {expected} colors, got {actual}")]
	PaletteSize {
		/// Expected number of colors
		expected: usize,
		/// Actual number of colors
		actual: usize,
	},

	/// A single file in a batch failed
	#[error("failed to recolor {}: {source}", .file.display())]
	BatchItem {
		/// The source file that failed
		file: PathBuf,
		/// Underlying failure
		source: Box<SpriteError>,
	},

	/// Image decode or encode failure
	#[error(transparent)]
	Image(#[from] image::ImageError),

	/// Palette preset could not be parsed
	#[error(transparent)]
	PalettePreset(#[from] serde_json::Error),

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}
