//! Error type shared by all format implementations and the format registry.
//!
//! Three outcomes are kept apart so callers can handle them separately:
//! - [`MeshIoError::Io`]: a file could not be opened, read or written,
//! - [`MeshIoError::Format`]: the content violates the grammar of a format,
//! - [`MeshIoError::UnsupportedFormat`]: no registered format applies to the file.

use std::{
	fmt::{Display, Formatter},
	io,
	path::{Path, PathBuf},
};
use thiserror::Error;

/// Result alias used throughout the polymesh crates.
pub type MeshIoResult<T> = Result<T, MeshIoError>;

/// The capability family a dispatch was made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatFamily {
	Polygon,
	Mesh,
}

impl Display for FormatFamily {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			FormatFamily::Polygon => "polygon",
			FormatFamily::Mesh => "mesh",
		})
	}
}

#[derive(Error, Debug)]
pub enum MeshIoError {
	#[error("i/o error{}: {source}", display_path(.path))]
	Io {
		path: Option<PathBuf>,
		#[source]
		source: io::Error,
	},

	#[error("invalid {format} file '{file}', line {line}: {message}")]
	Format {
		format: &'static str,
		file: String,
		line: usize,
		message: String,
	},

	#[error("no {family} format supports '{}'", .path.display())]
	UnsupportedFormat { path: PathBuf, family: FormatFamily },
}

impl MeshIoError {
	/// Wraps an I/O error that happened while accessing `path`.
	pub fn io(path: &Path, source: io::Error) -> Self {
		MeshIoError::Io {
			path: Some(path.to_path_buf()),
			source,
		}
	}

	/// Creates a grammar violation that is not tied to a particular line.
	pub fn format(format: &'static str, file: impl Into<String>, message: impl Into<String>) -> Self {
		MeshIoError::Format {
			format,
			file: file.into(),
			line: 0,
			message: message.into(),
		}
	}

	pub fn unsupported(path: &Path, family: FormatFamily) -> Self {
		MeshIoError::UnsupportedFormat {
			path: path.to_path_buf(),
			family,
		}
	}

	/// Attaches `path` to an I/O or format error that was raised without one.
	#[must_use]
	pub fn with_path(self, path: &Path) -> Self {
		match self {
			MeshIoError::Io { path: None, source } => MeshIoError::io(path, source),
			MeshIoError::Format {
				format,
				file,
				line,
				message,
			} if file.is_empty() => MeshIoError::Format {
				format,
				file: path.display().to_string(),
				line,
				message,
			},
			other => other,
		}
	}

	pub fn is_unsupported_format(&self) -> bool {
		matches!(self, MeshIoError::UnsupportedFormat { .. })
	}
}

impl From<io::Error> for MeshIoError {
	fn from(source: io::Error) -> Self {
		MeshIoError::Io { path: None, source }
	}
}

fn display_path(path: &Option<PathBuf>) -> String {
	match path {
		Some(path) => format!(" on '{}'", path.display()),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn io_error_mentions_path() {
		let err = MeshIoError::io(Path::new("/tmp/a.node"), io::Error::new(io::ErrorKind::NotFound, "gone"));
		assert_eq!(err.to_string(), "i/o error on '/tmp/a.node': gone");
	}

	#[test]
	fn io_error_without_path() {
		let err = MeshIoError::from(io::Error::other("broken pipe"));
		assert_eq!(err.to_string(), "i/o error: broken pipe");
		assert!(!err.is_unsupported_format());

		let err = err.with_path(Path::new("out.poly"));
		assert_eq!(err.to_string(), "i/o error on 'out.poly': broken pipe");
	}

	#[test]
	fn format_error_display() {
		let err = MeshIoError::Format {
			format: "triangle",
			file: "box.poly".to_string(),
			line: 7,
			message: "expected 2 segment endpoints".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"invalid triangle file 'box.poly', line 7: expected 2 segment endpoints"
		);
	}

	#[test]
	fn with_path_fills_missing_format_file() {
		let err = MeshIoError::format("triangle", "", "vertex 1 has 1 attributes, expected 0");
		assert_eq!(
			err.with_path(Path::new("out.poly")).to_string(),
			"invalid triangle file 'out.poly', line 0: vertex 1 has 1 attributes, expected 0"
		);

		let err = MeshIoError::format("triangle", "in.poly", "bad").with_path(Path::new("out.poly"));
		assert!(err.to_string().starts_with("invalid triangle file 'in.poly'"));
	}

	#[test]
	fn unsupported_format_display() {
		let err = MeshIoError::unsupported(Path::new("mesh.xyz"), FormatFamily::Mesh);
		assert!(err.is_unsupported_format());
		assert_eq!(err.to_string(), "no mesh format supports 'mesh.xyz'");
	}
}
