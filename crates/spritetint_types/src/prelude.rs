//! Prelude module for `spritetint_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use spritetint_types::prelude::*;
//!
//! let palette = TargetPalette::identity();
//! let remapper = Remapper::new(palette);
//! ```

// Colors and palettes
#[doc(inline)]
pub use crate::color::{MASTER_PALETTE, PALETTE_SIZE, PalettePreset, Rgb, TargetPalette};

// Errors
#[doc(inline)]
pub use crate::SpriteError;

// Recoloring
#[doc(inline)]
pub use crate::recolor::{
	BATCH_PREFIX, BatchFailure, BatchMode, BatchOptions, BatchReport, DEFAULT_RECOLOR_NAME,
	RecolorOptions, Remapper, batch_recolor, recolor_file,
};

// Sheet building
#[doc(inline)]
pub use crate::sheet::{
	DEFAULT_SHEET_NAME, SheetLayout, SheetOptions, SheetSummary, build_sheet, tile_frames,
};
