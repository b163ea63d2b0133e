//! sheet building through the public API

use std::fs;

use spritetint::prelude::*;

use crate::{open_rgba, write_frame};

#[test_log::test]
fn test_frames_then_recolor_sheet() {
	let dir = tempfile::tempdir().unwrap();
	write_frame(dir.path(), "walk_00.png", 4, [255, 255, 255, 255]);
	write_frame(dir.path(), "walk_01.png", 4, [124, 124, 125, 255]);
	write_frame(dir.path(), "walk_02.png", 4, [0, 0, 0, 255]);

	let summary = build_sheet(&SheetOptions {
		folder: dir.path().to_path_buf(),
		output_name: "walk".to_string(),
		columns: 2,
		padding: 1,
	})
	.unwrap();
	assert_eq!(summary.layout.sheet_size(), (10, 10));

	let output = recolor_file(&RecolorOptions {
		input: summary.output.clone(),
		output_name: "walk_red".to_string(),
		palette: TargetPalette::from_csv("#FF0000,#880000,#440000,#220000,#110000").unwrap(),
	})
	.unwrap();

	let sheet = open_rgba(&output);
	assert_eq!(sheet.get_pixel(0, 0).0, [0xFF, 0, 0, 255]);
	assert_eq!(sheet.get_pixel(5, 0).0, [0x88, 0, 0, 255]);
	assert_eq!(sheet.get_pixel(0, 5).0, [0x11, 0, 0, 255]);
	// padding and the empty cell stay transparent black
	assert_eq!(sheet.get_pixel(4, 0).0, [0, 0, 0, 0]);
	assert_eq!(sheet.get_pixel(7, 7).0, [0, 0, 0, 0]);
}

#[test]
fn test_numbered_frames_follow_lexical_order() {
	let dir = tempfile::tempdir().unwrap();
	write_frame(dir.path(), "frame2.png", 1, [2, 0, 0, 255]);
	write_frame(dir.path(), "frame10.png", 1, [10, 0, 0, 255]);
	write_frame(dir.path(), "frame1.png", 1, [1, 0, 0, 255]);

	let summary = build_sheet(&SheetOptions {
		folder: dir.path().to_path_buf(),
		columns: 3,
		..Default::default()
	})
	.unwrap();
	assert_eq!(summary.output, dir.path().join(DEFAULT_SHEET_NAME));

	let sheet = open_rgba(&summary.output);
	assert_eq!(sheet.get_pixel(0, 0).0[0], 1);
	assert_eq!(sheet.get_pixel(1, 0).0[0], 10);
	assert_eq!(sheet.get_pixel(2, 0).0[0], 2);
}

#[test]
fn test_empty_folder_writes_nothing() {
	let dir = tempfile::tempdir().unwrap();

	let err = build_sheet(&SheetOptions {
		folder: dir.path().to_path_buf(),
		..Default::default()
	})
	.unwrap_err();

	assert!(matches!(err, SpriteError::NoFramesFound(_)));
	assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
