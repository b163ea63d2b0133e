//! spritetint CLI
//!
//! A command-line tool for building sprite sheets and recoloring grayscale sprite art.
//!
//! # Features
//!
//! - **build**: Tile every PNG frame in a folder into one sprite sheet
//! - **recolor**: Recolor a single sprite sheet with a five-color palette
//! - **batch**: Recolor every PNG in a folder, writing `recolor_<name>` copies
//!
//! # Palette
//!
//! Source art uses five master grayscale shades:
//! `#FFFFFF`, `#7C7C7D`, `#A7A7A8`, `#B4B4B4`, `#000000`.
//! The target palette lists one replacement per shade, in the same order, either
//! inline with `--colors` (or `SPRITETINT_COLORS`) or from a JSON preset:
//!
//! ```json
//! {
//!   "name": "forest",
//!   "colors": ["#E8F5E9", "#2E7D32", "#66BB6A", "#A5D6A7", "#1B1B1B"]
//! }
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Build a 4-column sheet with 2px padding
//! spritetint build walk_cycle/ -c 4 -p 2 -o walk.png
//!
//! # Recolor one sheet
//! spritetint recolor walk_cycle/walk.png -o walk_red --colors "#FFE0E0,#7A1010,#B83030,#E06060,#1A0000"
//!
//! # Recolor a folder from a preset, continuing past broken files
//! spritetint batch sheets/ --palette-file forest.json --keep-going
//! ```

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use log::debug;
use serde::Serialize;
use spritetint::prelude::*;

#[derive(Parser)]
#[command(name = "spritetint")]
#[command(author = "spritetint project")]
#[command(version)]
#[command(about = "Sprite sheet builder and grayscale palette recolor tool", long_about = None)]
struct Cli {
	/// Show debug output
	#[arg(short, long, global = true)]
	verbose: bool,

	/// Print the result as JSON
	#[arg(long, global = true)]
	json: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Tile the PNG frames in a folder into a sprite sheet
	Build {
		/// Folder containing the frames (sorted by filename)
		#[arg(value_name = "FOLDER")]
		folder: PathBuf,

		/// Output filename, written into the frame folder
		#[arg(short, long, value_name = "NAME", default_value = DEFAULT_SHEET_NAME)]
		output: String,

		/// Number of columns
		#[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
		columns: u32,

		/// Trailing pixels after each frame
		#[arg(short, long, default_value_t = 0)]
		padding: u32,
	},

	/// Recolor a single sprite sheet
	Recolor {
		/// Sprite sheet to recolor
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output filename, written next to the input
		#[arg(short, long, value_name = "NAME", default_value = DEFAULT_RECOLOR_NAME)]
		output: String,

		#[command(flatten)]
		palette: PaletteArgs,
	},

	/// Recolor every PNG in a folder
	Batch {
		/// Folder containing the PNGs
		#[arg(value_name = "FOLDER")]
		folder: PathBuf,

		/// Keep going after a file fails and report all failures
		#[arg(short, long)]
		keep_going: bool,

		#[command(flatten)]
		palette: PaletteArgs,
	},
}

/// Target palette sources, in priority order: preset file, inline colors, identity
#[derive(Args)]
struct PaletteArgs {
	/// Five comma-separated hex colors, one per master shade
	#[arg(long, value_name = "HEX,HEX,HEX,HEX,HEX", env = "SPRITETINT_COLORS")]
	colors: Option<String>,

	/// JSON palette preset
	#[arg(long, value_name = "PRESET")]
	palette_file: Option<PathBuf>,
}

impl PaletteArgs {
	fn resolve(&self) -> anyhow::Result<TargetPalette> {
		if let Some(path) = &self.palette_file {
			let preset = PalettePreset::from_file(path)
				.with_context(|| format!("cannot load palette preset {}", path.display()))?;
			debug!("Using palette preset {:?}", preset.name);
			return Ok(preset.palette()?);
		}

		match &self.colors {
			Some(colors) => Ok(TargetPalette::from_csv(colors)?),
			None => Ok(TargetPalette::identity()),
		}
	}
}

#[derive(Serialize)]
struct RecolorSummary {
	output: PathBuf,
	palette: TargetPalette,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Handle build command
fn handle_build(
	folder: PathBuf,
	output: String,
	columns: u32,
	padding: u32,
	json: bool,
) -> anyhow::Result<()> {
	let summary = build_sheet(&SheetOptions {
		folder,
		output_name: output,
		columns,
		padding,
	})?;

	if json {
		return print_json(&summary);
	}

	let (width, height) = summary.layout.sheet_size();
	println!(
		"✓ Sprite sheet created: {} ({} frames, {}x{})",
		summary.output.display(),
		summary.frame_count,
		width,
		height
	);
	Ok(())
}

/// Handle recolor command
fn handle_recolor(
	input: PathBuf,
	output: String,
	palette: &PaletteArgs,
	json: bool,
) -> anyhow::Result<()> {
	let palette = palette.resolve()?;
	let output = recolor_file(&RecolorOptions {
		input,
		output_name: output,
		palette,
	})?;

	if json {
		return print_json(&RecolorSummary {
			output,
			palette,
		});
	}

	println!("✓ Recolored sheet saved as: {}", output.display());
	Ok(())
}

/// Handle batch command
fn handle_batch(
	folder: PathBuf,
	keep_going: bool,
	palette: &PaletteArgs,
	json: bool,
) -> anyhow::Result<()> {
	let palette = palette.resolve()?;
	let mode = if keep_going {
		BatchMode::Continue
	} else {
		BatchMode::FailFast
	};

	let report = batch_recolor(&BatchOptions {
		folder,
		palette,
		mode,
	})?;

	if json {
		print_json(&report)?;
	} else {
		for path in &report.written {
			println!("✓ {}", path.display());
		}
		for failure in &report.failed {
			println!("✗ {}: {}", failure.file.display(), failure.error);
		}
	}

	if !report.is_complete() {
		let total = report.failed.len() + report.written.len();
		bail!("{} of {} files failed", report.failed.len(), total);
	}

	if !json {
		println!("✓ Batch recolor complete ({} files)", report.written.len());
	}
	Ok(())
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let default_filter = if cli.verbose {
		"debug"
	} else {
		"info"
	};
	env_logger::init_from_env(env_logger::Env::default().default_filter_or(default_filter));

	match cli.command {
		Commands::Build {
			folder,
			output,
			columns,
			padding,
		} => handle_build(folder, output, columns, padding, cli.json),

		Commands::Recolor {
			input,
			output,
			palette,
		} => handle_recolor(input, output, &palette, cli.json),

		Commands::Batch {
			folder,
			keep_going,
			palette,
		} => handle_batch(folder, keep_going, &palette, cli.json),
	}
}
