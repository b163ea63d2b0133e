//! batch recoloring through the public API

use std::collections::BTreeMap;
use std::fs;

use spritetint::prelude::*;

use crate::{open_rgba, write_frame};

#[test_log::test]
fn test_batch_keeps_originals() {
	let dir = tempfile::tempdir().unwrap();
	write_frame(dir.path(), "idle.png", 2, [180, 180, 180, 255]);
	write_frame(dir.path(), "run.png", 2, [167, 167, 168, 200]);
	write_frame(dir.path(), "ghost.png", 2, [255, 255, 255, 0]);

	let originals: BTreeMap<_, _> = ["idle.png", "run.png", "ghost.png"]
		.into_iter()
		.map(|name| (name, fs::read(dir.path().join(name)).unwrap()))
		.collect();

	let palette = TargetPalette::from_csv("#010101,#020202,#030303,#040404,#050505").unwrap();
	let report = batch_recolor(&BatchOptions {
		folder: dir.path().to_path_buf(),
		palette,
		mode: BatchMode::FailFast,
	})
	.unwrap();
	assert_eq!(report.written.len(), 3);

	for (name, bytes) in &originals {
		assert_eq!(&fs::read(dir.path().join(name)).unwrap(), bytes);
		assert!(dir.path().join(format!("{BATCH_PREFIX}{name}")).exists());
	}

	assert_eq!(open_rgba(&dir.path().join("recolor_idle.png")).get_pixel(0, 0).0, [4, 4, 4, 255]);
	assert_eq!(open_rgba(&dir.path().join("recolor_run.png")).get_pixel(1, 1).0, [3, 3, 3, 200]);
	assert_eq!(
		open_rgba(&dir.path().join("recolor_ghost.png")).get_pixel(0, 0).0,
		[255, 255, 255, 0]
	);
}

#[test]
fn test_batch_without_pngs() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("palette.txt"), "#FFFFFF").unwrap();

	let err = batch_recolor(&BatchOptions {
		folder: dir.path().to_path_buf(),
		palette: TargetPalette::identity(),
		mode: BatchMode::Continue,
	})
	.unwrap_err();
	assert!(matches!(err, SpriteError::NoPngsFound(_)));
}
