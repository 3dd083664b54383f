//! Mock file format for testing format selection.
//!
//! A `MockFormat` accepts files by extension, never touches the file system and
//! records every delegated call, so tests can assert which format was selected.
//!
//! ```rust
//! use polymesh_format::*;
//! use std::path::Path;
//!
//! let format = MockFormat::new("mock", &["poly"], MockFormatProfile::Polygon).shared();
//! let mut registry = FormatRegistry::new_empty();
//! registry.register_shared(format.clone());
//!
//! registry.read_polygon(Path::new("a.poly")).unwrap();
//! assert_eq!(format.calls(), vec!["read a.poly"]);
//! ```

use crate::{FileFormat, MeshFormat, PolygonFormat, has_extension};
use parking_lot::Mutex;
use polymesh_core::{Mesh, MeshIoError, MeshIoResult, Polygon, Vertex};
use std::{io, io::Write, path::Path, sync::Arc};

/// Which capability families a mock format implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockFormatProfile {
	Polygon,
	Mesh,
	Both,
	Neither,
	/// Both families, but every read fails with a format error and every write with an I/O error.
	Failing,
}

pub struct MockFormat {
	name: String,
	extensions: Vec<&'static str>,
	profile: MockFormatProfile,
	calls: Mutex<Vec<String>>,
}

impl MockFormat {
	pub fn new(name: &str, extensions: &[&'static str], profile: MockFormatProfile) -> MockFormat {
		MockFormat {
			name: name.to_string(),
			extensions: extensions.to_vec(),
			profile,
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn shared(self) -> Arc<MockFormat> {
		Arc::new(self)
	}

	/// Delegated calls so far, e.g. `"read a.poly"`.
	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().clone()
	}

	fn record(&self, operation: &str, path: &Path) -> MeshIoResult<()> {
		self.calls.lock().push(format!("{operation} {}", path.display()));
		if self.profile != MockFormatProfile::Failing {
			return Ok(());
		}
		if operation == "read" || operation == "import" {
			Err(MeshIoError::Format {
				format: "mock",
				file: path.display().to_string(),
				line: 1,
				message: "mock failure".to_string(),
			})
		} else {
			Err(MeshIoError::io(path, io::Error::other("mock failure")))
		}
	}
}

impl FileFormat for MockFormat {
	fn name(&self) -> &str {
		&self.name
	}

	fn extensions(&self) -> &[&str] {
		&self.extensions
	}

	fn is_supported(&self, path: &Path) -> bool {
		has_extension(path, &self.extensions)
	}

	fn as_polygon_format(&self) -> Option<&dyn PolygonFormat> {
		match self.profile {
			MockFormatProfile::Polygon | MockFormatProfile::Both | MockFormatProfile::Failing => Some(self),
			MockFormatProfile::Mesh | MockFormatProfile::Neither => None,
		}
	}

	fn as_mesh_format(&self) -> Option<&dyn MeshFormat> {
		match self.profile {
			MockFormatProfile::Mesh | MockFormatProfile::Both | MockFormatProfile::Failing => Some(self),
			MockFormatProfile::Polygon | MockFormatProfile::Neither => None,
		}
	}
}

impl PolygonFormat for MockFormat {
	fn read(&self, path: &Path) -> MeshIoResult<Polygon> {
		self.record("read", path)?;
		let mut polygon = Polygon::new();
		polygon.add_vertex(Vertex::new(0.0, 0.0));
		Ok(polygon)
	}

	fn write_to(&self, polygon: &Polygon, writer: &mut dyn Write) -> MeshIoResult<()> {
		writeln!(writer, "mock {}", polygon.vertex_count())?;
		Ok(())
	}

	fn write(&self, _polygon: &Polygon, path: &Path) -> MeshIoResult<()> {
		self.record("write", path)
	}
}

impl MeshFormat for MockFormat {
	fn import(&self, path: &Path) -> MeshIoResult<Mesh> {
		self.record("import", path)?;
		Ok(Mesh::new())
	}

	fn export(&self, _mesh: &Mesh, path: &Path) -> MeshIoResult<()> {
		self.record("export", path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failing_profile() {
		let format = MockFormat::new("broken", &["poly"], MockFormatProfile::Failing);
		assert!(matches!(
			format.read(Path::new("a.poly")).unwrap_err(),
			MeshIoError::Format { .. }
		));
		assert!(matches!(
			format.export(&Mesh::new(), Path::new("a.poly")).unwrap_err(),
			MeshIoError::Io { path: Some(_), .. }
		));
		assert_eq!(format.calls(), vec!["read a.poly", "export a.poly"]);
	}

	#[test]
	fn stream_write() {
		let format = MockFormat::new("mock", &["poly"], MockFormatProfile::Polygon);
		let mut buffer = Vec::new();
		format.write_to(&Polygon::new(), &mut buffer).unwrap();
		assert_eq!(buffer, b"mock 0\n");
		assert!(format.calls().is_empty());
	}
}
