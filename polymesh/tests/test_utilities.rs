#![allow(dead_code)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Path of a fixture in the workspace `testdata` directory.
pub fn testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../testdata").join(filename)
}

/// A fresh temp dir and the path of `filename` inside it. Keep the dir alive while the path is used.
pub fn temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

pub fn polymesh() -> Command {
	Command::new(cargo::cargo_bin!())
}
