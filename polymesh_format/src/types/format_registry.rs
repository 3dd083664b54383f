//! `FormatRegistry` selects a file format by filename and delegates reads and writes to it.
//!
//! Formats are scanned in registration order; the first format of the requested family
//! whose predicate accepts the file wins. This makes registration order the priority
//! when several formats could handle the same file.
//!
//! # Example Usage
//!
//! ```rust
//! use polymesh_core::Polygon;
//! use polymesh_format::FormatRegistry;
//!
//! fn main() -> polymesh_core::MeshIoResult<()> {
//!     // Registry with the built-in Triangle and OBJ formats
//!     let registry = FormatRegistry::default();
//!
//!     let mut polygon = Polygon::new();
//!     polygon.add_ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], 1);
//!
//!     let path = std::env::temp_dir().join("registry_example.poly");
//!     registry.write_polygon(&polygon, &path)?;
//!     assert_eq!(registry.read_polygon(&path)?, polygon);
//!
//!     // Nothing is registered for this extension
//!     assert!(registry.read_polygon(std::path::Path::new("shape.xyz")).is_err());
//!     Ok(())
//! }
//! ```

use crate::{FileFormat, MeshFormat, ObjFormat, PolygonFormat, TriangleFormat, WriterConfig};
use polymesh_core::{FormatFamily, Mesh, MeshIoError, MeshIoResult, Polygon};
use std::{fmt::Debug, path::Path, sync::Arc};

/// Ordered, append-only collection of file formats.
///
/// Registration needs `&mut self` and dispatch only `&self`, so all formats are
/// registered before the registry is shared. Cloning is cheap: formats are
/// reference counted.
#[derive(Clone)]
pub struct FormatRegistry {
	formats: Vec<Arc<dyn FileFormat>>,
}

impl FormatRegistry {
	/// Creates a registry without any formats. Every dispatch on it fails with
	/// [`MeshIoError::UnsupportedFormat`].
	pub fn new_empty() -> Self {
		Self { formats: Vec::new() }
	}

	/// Creates a registry with the built-in formats, in this order:
	/// - Triangle (`.node`, `.poly`, `.ele`): polygons and meshes
	/// - Wavefront OBJ (`.obj`): meshes
	pub fn new_with_config(config: &WriterConfig) -> Self {
		let mut registry = Self::new_empty();
		registry.register(TriangleFormat::new(config.clone()));
		registry.register(ObjFormat::new(config.clone()));
		registry
	}

	/// Appends a format at the end of the scan order.
	///
	/// Formats implementing neither capability family are accepted but never selected.
	pub fn register<F: FileFormat + 'static>(&mut self, format: F) {
		self.register_shared(Arc::new(format));
	}

	/// Appends an already shared format. The same instance may be registered more than once.
	pub fn register_shared(&mut self, format: Arc<dyn FileFormat>) {
		log::debug!("register format '{}' at position {}", format.name(), self.formats.len());
		self.formats.push(format);
	}

	/// Registered formats in scan order.
	pub fn formats(&self) -> impl Iterator<Item = &dyn FileFormat> {
		self.formats.iter().map(|format| format.as_ref())
	}

	pub fn len(&self) -> usize {
		self.formats.len()
	}

	pub fn is_empty(&self) -> bool {
		self.formats.is_empty()
	}

	/// Whether any registered format, of any family, accepts `path`.
	pub fn is_supported(&self, path: &Path) -> bool {
		self.formats.iter().any(|format| format.is_supported(path))
	}

	/// First polygon-capable format accepting `path`.
	pub fn find_polygon_format(&self, path: &Path) -> MeshIoResult<&dyn PolygonFormat> {
		self.select(path, FormatFamily::Polygon, |format| format.as_polygon_format())
	}

	/// First mesh-capable format accepting `path`.
	pub fn find_mesh_format(&self, path: &Path) -> MeshIoResult<&dyn MeshFormat> {
		self.select(path, FormatFamily::Mesh, |format| format.as_mesh_format())
	}

	pub fn read_polygon(&self, path: &Path) -> MeshIoResult<Polygon> {
		let format = self.find_polygon_format(path)?;
		log::debug!("read polygon '{}' as {}", path.display(), format.name());
		format.read(path)
	}

	pub fn write_polygon(&self, polygon: &Polygon, path: &Path) -> MeshIoResult<()> {
		let format = self.find_polygon_format(path)?;
		log::debug!("write polygon '{}' as {}", path.display(), format.name());
		format.write(polygon, path)
	}

	pub fn import_mesh(&self, path: &Path) -> MeshIoResult<Mesh> {
		let format = self.find_mesh_format(path)?;
		log::debug!("import mesh '{}' as {}", path.display(), format.name());
		format.import(path)
	}

	pub fn write_mesh(&self, mesh: &Mesh, path: &Path) -> MeshIoResult<()> {
		let format = self.find_mesh_format(path)?;
		log::debug!("write mesh '{}' as {}", path.display(), format.name());
		format.export(mesh, path)
	}

	fn select<'a, T>(
		&'a self,
		path: &Path,
		family: FormatFamily,
		capability: impl Fn(&'a dyn FileFormat) -> Option<&'a T>,
	) -> MeshIoResult<&'a T>
	where
		T: FileFormat + ?Sized,
	{
		for format in &self.formats {
			let Some(candidate) = capability(format.as_ref()) else {
				log::trace!("skip '{}': not a {family} format", format.name());
				continue;
			};
			if candidate.is_supported(path) {
				return Ok(candidate);
			}
			log::trace!("skip '{}': does not support '{}'", format.name(), path.display());
		}
		Err(MeshIoError::unsupported(path, family))
	}
}

impl Default for FormatRegistry {
	fn default() -> Self {
		Self::new_with_config(&WriterConfig::default())
	}
}

impl Debug for FormatRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.formats.iter().map(|format| format.name())).finish()
	}
}
