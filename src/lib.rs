#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `spritetint` builds sprite sheets from folders of frames and recolors
//! grayscale sprite art with a five-color target palette.
//!
//! The library surface is re-exported from `spritetint_types`; the
//! `spritetint` binary is a thin command-line front end over it.
//!
//! ```no_run
//! use spritetint::prelude::*;
//!
//! # fn main() -> Result<(), SpriteError> {
//! build_sheet(&SheetOptions {
//!     folder: "frames".into(),
//!     columns: 4,
//!     padding: 2,
//!     ..Default::default()
//! })?;
//!
//! recolor_file(&RecolorOptions {
//!     input: "frames/spritesheet.png".into(),
//!     output_name: "spritesheet_red".to_string(),
//!     palette: TargetPalette::from_csv("#FFE0E0,#7A1010,#B83030,#E06060,#1A0000")?,
//! })?;
//! # Ok(())
//! # }
//! ```
pub use spritetint_types::*;
