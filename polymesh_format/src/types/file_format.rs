//! Capability traits implemented by every file format.
//!
//! A format always implements [`FileFormat`], which provides the selection
//! predicate. It opts into the polygon and/or mesh family by implementing
//! [`PolygonFormat`] / [`MeshFormat`] and returning itself from
//! [`FileFormat::as_polygon_format`] / [`FileFormat::as_mesh_format`].
//!
//! ```
//! use polymesh_core::{MeshIoResult, Polygon};
//! use polymesh_format::{FileFormat, PolygonFormat, has_extension};
//! use std::{io::Write, path::Path};
//!
//! struct Empty;
//!
//! impl FileFormat for Empty {
//!     fn name(&self) -> &str {
//!         "empty"
//!     }
//!     fn is_supported(&self, path: &Path) -> bool {
//!         has_extension(path, &["empty"])
//!     }
//!     fn as_polygon_format(&self) -> Option<&dyn PolygonFormat> {
//!         Some(self)
//!     }
//! }
//!
//! impl PolygonFormat for Empty {
//!     fn read(&self, _path: &Path) -> MeshIoResult<Polygon> {
//!         Ok(Polygon::new())
//!     }
//!     fn write_to(&self, _polygon: &Polygon, _writer: &mut dyn Write) -> MeshIoResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! assert!(Empty.is_supported(Path::new("a.EMPTY")));
//! assert!(Empty.as_mesh_format().is_none());
//! ```

use polymesh_core::{Mesh, MeshIoError, MeshIoResult, Polygon};
use std::{
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

/// The selection predicate every registered format provides.
pub trait FileFormat: Send + Sync {
	/// Short identifier used in logs and listings.
	fn name(&self) -> &str;

	/// File extensions this format usually handles, without leading dot.
	fn extensions(&self) -> &[&str] {
		&[]
	}

	/// Whether this format is willing to handle `path`.
	///
	/// Must not fail and must not have side effects; when the format cannot
	/// decide it returns `false`.
	fn is_supported(&self, path: &Path) -> bool;

	fn as_polygon_format(&self) -> Option<&dyn PolygonFormat> {
		None
	}

	fn as_mesh_format(&self) -> Option<&dyn MeshFormat> {
		None
	}
}

/// Reads and writes polygon geometry.
pub trait PolygonFormat: FileFormat {
	fn read(&self, path: &Path) -> MeshIoResult<Polygon>;

	/// Serializes `polygon` into any byte sink.
	fn write_to(&self, polygon: &Polygon, writer: &mut dyn Write) -> MeshIoResult<()>;

	/// Creates or overwrites `path`. Produces exactly the bytes of [`PolygonFormat::write_to`].
	fn write(&self, polygon: &Polygon, path: &Path) -> MeshIoResult<()> {
		let file = File::create(path).map_err(|e| MeshIoError::io(path, e))?;
		let mut writer = BufWriter::new(file);
		self.write_to(polygon, &mut writer).map_err(|e| e.with_path(path))?;
		writer.flush().map_err(|e| MeshIoError::io(path, e))
	}
}

/// Imports and exports meshes.
pub trait MeshFormat: FileFormat {
	fn import(&self, path: &Path) -> MeshIoResult<Mesh>;

	fn export(&self, mesh: &Mesh, path: &Path) -> MeshIoResult<()>;
}

/// Case-insensitive check of the extension of `path` against `extensions`.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
	match path.extension().and_then(|ext| ext.to_str()) {
		Some(ext) => extensions
			.iter()
			.any(|candidate| sanitize_extension(candidate) == ext.to_ascii_lowercase()),
		None => false,
	}
}

fn sanitize_extension(ext: &str) -> String {
	ext.to_ascii_lowercase().trim_matches('.').to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("box.poly", true)]
	#[case("BOX.POLY", true)]
	#[case("dir.node/box.ele", true)]
	#[case("/tmp/box.poly.bak", false)]
	#[case("poly", false)]
	#[case("box.", false)]
	#[case("", false)]
	fn extension_matching(#[case] path: &str, #[case] expected: bool) {
		assert_eq!(has_extension(Path::new(path), &["node", ".poly", "ELE"]), expected);
	}
}
