//! Core types and operations for the `spritetint` project.
//!
//! # Operations
//!
//! - **Sheet building**: tile every PNG frame in a folder onto one grid ([`sheet`])
//! - **Recoloring**: swap the five master grayscale shades for a target palette,
//!   for one image or a whole folder ([`recolor`])
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use spritetint_types::prelude::*;
//! use image::Rgba;
//!
//! let palette = TargetPalette::from_hex_strs(&["#112233", "#445566", "#778899", "#AABBCC", "#DDEEFF"])?;
//! let remapper = Remapper::new(palette);
//!
//! assert_eq!(remapper.map_pixel(Rgba([255, 255, 255, 255])), Rgba([0x11, 0x22, 0x33, 255]));
//! assert_eq!(remapper.map_pixel(Rgba([255, 255, 255, 0])), Rgba([255, 255, 255, 0]));
//! # Ok::<(), SpriteError>(())
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use spritetint_types::sheet::{SheetOptions, build_sheet};
//!
//! let summary = build_sheet(&SheetOptions {
//!     folder: "frames".into(),
//!     columns: 4,
//!     ..Default::default()
//! });
//! ```

pub mod color;
pub mod frames;
pub mod recolor;
pub mod sheet;

mod error;

pub use error::SpriteError;

/// `use spritetint_types::prelude::*;` to import commonly used items.
pub mod prelude;
