//! Grayscale sprite recoloring.
//!
//! Source sheets are drawn with the five master shades from
//! [`MASTER_PALETTE`](crate::color::MASTER_PALETTE). Recoloring swaps each
//! master shade for the target color at the same index; see [`Remapper`] for
//! the exact pixel rule.
//!
//! # Modes
//!
//! - **Single**: [`recolor_file`] writes one recolored copy next to the input
//! - **Batch**: [`batch_recolor`] writes `recolor_<name>` next to every PNG in
//!   a folder
//!
//! Originals are never modified in either mode.
//!
//! # Example
//!
//! ```no_run
//! use spritetint_types::color::TargetPalette;
//! use spritetint_types::recolor::{BatchMode, BatchOptions, batch_recolor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let palette = TargetPalette::from_csv("#F4E3C1,#7A3B2E,#C8763A,#E0A45C,#1A1020")?;
//! let report = batch_recolor(&BatchOptions {
//!     folder: "sheets".into(),
//!     palette,
//!     mode: BatchMode::FailFast,
//! })?;
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::color::TargetPalette;
use crate::error::SpriteError;
use crate::frames;

pub mod remapper;

pub use remapper::Remapper;

/// Prefix given to every file written by a batch recolor
pub const BATCH_PREFIX: &str = "recolor_";

/// Default output filename for single recolors
pub const DEFAULT_RECOLOR_NAME: &str = "recolor.png";

/// Inputs for a single-image recolor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecolorOptions {
	/// Image to recolor
	pub input: PathBuf,
	/// Output filename, written next to `input`
	pub output_name: String,
	/// Replacement colors
	pub palette: TargetPalette,
}

/// Failure policy for batch recolors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchMode {
	/// Stop at the first file that cannot be decoded or written
	#[default]
	FailFast,
	/// Attempt every file and report the failures
	Continue,
}

impl fmt::Display for BatchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::FailFast => write!(f, "fail-fast"),
			Self::Continue => write!(f, "continue"),
		}
	}
}

/// Inputs for a batch recolor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOptions {
	/// Folder whose PNGs are recolored
	pub folder: PathBuf,
	/// Replacement colors
	pub palette: TargetPalette,
	/// What to do when one file fails
	pub mode: BatchMode,
}

/// A file that could not be recolored in [`BatchMode::Continue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
	/// Source file
	pub file: PathBuf,
	/// Error message
	pub error: String,
}

/// Outcome of a batch recolor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
	/// Files written, in processing order
	pub written: Vec<PathBuf>,
	/// Files skipped because of an error (only in [`BatchMode::Continue`])
	pub failed: Vec<BatchFailure>,
}

impl BatchReport {
	/// Returns true if every file was recolored.
	pub fn is_complete(&self) -> bool {
		self.failed.is_empty()
	}
}

/// Returns the batch output filename for `name`.
pub fn batch_output_name(name: &str) -> String {
	format!("{BATCH_PREFIX}{name}")
}

/// Decodes `source`, recolors it and writes the result to `output`.
///
/// Returns the number of pixels that changed.
pub fn recolor_to(source: &Path, output: &Path, remapper: &Remapper) -> Result<usize, SpriteError> {
	let mut image = frames::load_rgba(source)?;
	let changed = remapper.apply_in_place(&mut image);
	image.save(output)?;
	Ok(changed)
}

/// Recolors a single image.
///
/// The result is written to `options.output_name` in the input's folder,
/// with `.png` appended when missing. An existing file with that name is
/// overwritten.
///
/// # Errors
///
/// - [`SpriteError::InvalidInput`] if the input file does not exist
/// - [`SpriteError::MissingOutputName`] if the output name is blank
/// - decode or encode failures
pub fn recolor_file(options: &RecolorOptions) -> Result<PathBuf, SpriteError> {
	let input = options.input.as_path();
	if input.as_os_str().is_empty() || !input.is_file() {
		return Err(SpriteError::InvalidInput(input.to_path_buf()));
	}

	let output_name = frames::normalize_output_name(&options.output_name)?;
	let output = frames::parent_folder(input).join(output_name);

	let remapper = Remapper::new(options.palette);
	let changed = recolor_to(input, &output, &remapper)?;
	info!("Recolored sheet saved as {} ({} pixels changed)", output.display(), changed);

	Ok(output)
}

/// Recolors every PNG in a folder.
///
/// Each `name.png` produces `recolor_name.png` in the same folder. The file
/// list is taken before anything is written and processed in filename order.
///
/// # Errors
///
/// - [`SpriteError::InvalidFolder`] if the folder does not exist
/// - [`SpriteError::NoPngsFound`] if the folder holds no PNGs
/// - [`SpriteError::BatchItem`] for the first failing file in
///   [`BatchMode::FailFast`]; files before it have already been written
pub fn batch_recolor(options: &BatchOptions) -> Result<BatchReport, SpriteError> {
	let folder = options.folder.as_path();
	let names = frames::list_pngs(folder, &[])?;
	if names.is_empty() {
		return Err(SpriteError::NoPngsFound(folder.to_path_buf()));
	}

	debug!("Batch recolor of {} files ({})", names.len(), options.mode);

	let remapper = Remapper::new(options.palette);
	let mut report = BatchReport::default();

	for name in &names {
		let source = folder.join(name);
		let output = folder.join(batch_output_name(name));

		match recolor_to(&source, &output, &remapper) {
			Ok(changed) => {
				debug!("{name}: {changed} pixels changed");
				report.written.push(output);
			}
			Err(err) => match options.mode {
				BatchMode::FailFast => {
					return Err(SpriteError::BatchItem {
						file: source,
						source: Box::new(err),
					});
				}
				BatchMode::Continue => {
					warn!("Skipping {}: {}", source.display(), err);
					report.failed.push(BatchFailure {
						file: source,
						error: err.to_string(),
					});
				}
			},
		}
	}

	info!(
		"Batch recolor complete: {} written, {} failed",
		report.written.len(),
		report.failed.len()
	);

	Ok(report)
}
