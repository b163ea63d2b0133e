//! PNG discovery and loading.
//!
//! Both the sheet builder and the batch remapper work on "every PNG in a
//! folder". The rules live here so they stay identical:
//!
//! - regular files only, matched by a case-insensitive `.png` suffix
//! - sorted by filename in ascending byte order (frame order for sheets)

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::debug;

use crate::error::SpriteError;

/// File extension appended to output names that lack one
pub const PNG_EXTENSION: &str = ".png";

/// Returns true if `name` ends in `.png`, ignoring case.
pub fn is_png_name(name: &str) -> bool {
	name.len() >= PNG_EXTENSION.len()
		&& name.is_char_boundary(name.len() - PNG_EXTENSION.len())
		&& name[name.len() - PNG_EXTENSION.len()..].eq_ignore_ascii_case(PNG_EXTENSION)
}

/// Trims `name` and appends `.png` if it is missing.
///
/// # Errors
///
/// Returns [`SpriteError::MissingOutputName`] if the trimmed name is empty.
pub fn normalize_output_name(name: &str) -> Result<String, SpriteError> {
	let name = name.trim();
	if name.is_empty() {
		return Err(SpriteError::MissingOutputName);
	}

	if is_png_name(name) {
		Ok(name.to_string())
	} else {
		Ok(format!("{name}{PNG_EXTENSION}"))
	}
}

/// Checks that `folder` exists and is a directory.
pub fn ensure_folder(folder: &Path) -> Result<(), SpriteError> {
	if folder.as_os_str().is_empty() || !folder.is_dir() {
		return Err(SpriteError::InvalidFolder(folder.to_path_buf()));
	}
	Ok(())
}

/// Lists the PNG filenames in `folder`, sorted lexically.
///
/// Symlinks to files are followed. Names listed in `exclude` are skipped.
/// Names that are not valid UTF-8 are skipped as well since they cannot be
/// compared against user input.
pub fn list_pngs(folder: &Path, exclude: &[&str]) -> Result<Vec<String>, SpriteError> {
	ensure_folder(folder)?;

	let mut names = Vec::new();
	for entry in fs::read_dir(folder)? {
		let entry = entry?;
		if !entry.path().is_file() {
			continue;
		}

		let Ok(name) = entry.file_name().into_string() else {
			debug!("Skipping non UTF-8 filename in {}", folder.display());
			continue;
		};

		if is_png_name(&name) && !exclude.contains(&name.as_str()) {
			names.push(name);
		}
	}

	names.sort();
	debug!("Found {} PNGs in {}", names.len(), folder.display());
	Ok(names)
}

/// Decodes an image and promotes it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, SpriteError> {
	let img = image::open(path)?.into_rgba8();
	debug!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
	Ok(img)
}

/// Returns the folder a file lives in, treating a bare filename as the
/// current directory.
pub fn parent_folder(path: &Path) -> PathBuf {
	path.parent().map(Path::to_path_buf).unwrap_or_default()
}
