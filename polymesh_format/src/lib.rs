//! polymesh format: read and write polygons and meshes in several file formats.
//!
//! A [`FormatRegistry`] holds an ordered list of [`FileFormat`]s. Each format
//! decides by filename whether it handles a file and exposes its polygon or mesh
//! capability through [`FileFormat::as_polygon_format`] and
//! [`FileFormat::as_mesh_format`]. The registry picks the first matching format
//! of the requested family and delegates to it.
//!
//! # Quick start
//! ```rust
//! use polymesh_core::{Mesh, Polygon};
//! use polymesh_format::FormatRegistry;
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = FormatRegistry::default();
//!     let dir = std::env::temp_dir().join("polymesh_quick_start");
//!     std::fs::create_dir_all(&dir)?;
//!
//!     let mut polygon = Polygon::new();
//!     polygon.add_ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)], 1);
//!     registry.write_polygon(&polygon, &dir.join("box.poly"))?;
//!
//!     // a polygon without triangles is still a valid mesh, so it can go to OBJ
//!     let mesh = Mesh::from(registry.read_polygon(&dir.join("box.poly"))?);
//!     registry.write_mesh(&mesh, &dir.join("box.obj"))?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! - `test`: exposes [`MockFormat`] for tests in downstream crates.

mod format;
/// Re-exports the built-in formats.
pub use format::*;

mod types;
/// Re-exports the format traits, the registry and writer settings.
pub use types::*;
