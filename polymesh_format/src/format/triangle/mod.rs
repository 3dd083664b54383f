//! Native file set of the Triangle mesh generator.
//!
//! | File     | Content                                   | Polygon | Mesh         |
//! |----------|-------------------------------------------|:-------:|:------------:|
//! | `*.node` | vertices                                  | ✅      | ✅ required  |
//! | `*.poly` | vertices, segments, holes, regions        | ✅      | ✅ optional  |
//! | `*.ele`  | triangles                                 | ❌      | ✅ required  |
//! | `*.neigh`| triangle neighbors                        | ❌      | ✅ optional  |
//! | `*.edge` | edges                                     | ❌      | ✅ optional  |
//!
//! A mesh is addressed by any of its `.node`, `.poly` or `.ele` files; the other
//! files of the set are found by swapping the extension.
//!
//! Polygons written to a `.poly` path are self-contained. Written to a `.node` or
//! `.ele` path they are split the way Triangle expects: vertices in the `.node`
//! file, constraints in a sibling `.poly` file without vertices. Reading a polygon
//! from a `.node` or `.ele` path prefers that sibling `.poly` file.

mod reader;
mod writer;

use crate::{FileFormat, MeshFormat, PolygonFormat, WriterConfig, has_extension};
use polymesh_core::{Mesh, MeshIoResult, Polygon, Vertex, io::TextWriter};
use reader::*;
use std::{io, io::Write, path::Path};
use writer::*;

const FORMAT: &str = "triangle";
const EXTENSIONS: [&str; 3] = ["node", "poly", "ele"];

#[derive(Clone, Debug, Default)]
pub struct TriangleFormat {
	config: WriterConfig,
}

impl TriangleFormat {
	pub fn new(config: WriterConfig) -> TriangleFormat {
		TriangleFormat { config }
	}

	fn first_index(&self) -> usize {
		self.config.first_index.offset()
	}

	fn write_self_contained(&self, writer: &mut TextWriter, polygon: &Polygon) -> io::Result<()> {
		let first_index = self.first_index();
		write_nodes(writer, &polygon.vertices, first_index)?;
		write_constraints(writer, &constraints_of(polygon), first_index)
	}
}

fn constraints_of(polygon: &Polygon) -> Constraints<'_> {
	Constraints {
		segments: &polygon.segments,
		holes: &polygon.holes,
		regions: &polygon.regions,
	}
}

fn vertex_attribute_count(vertices: &[Vertex]) -> MeshIoResult<usize> {
	uniform_attribute_count("vertex", vertices.iter().map(|v| v.attributes.as_slice()))
}

impl FileFormat for TriangleFormat {
	fn name(&self) -> &str {
		FORMAT
	}

	fn extensions(&self) -> &[&str] {
		&EXTENSIONS
	}

	fn is_supported(&self, path: &Path) -> bool {
		has_extension(path, &EXTENSIONS)
	}

	fn as_polygon_format(&self) -> Option<&dyn PolygonFormat> {
		Some(self)
	}

	fn as_mesh_format(&self) -> Option<&dyn MeshFormat> {
		Some(self)
	}
}

impl PolygonFormat for TriangleFormat {
	/// Reads a `.poly` file completely. For other extensions the sibling `.poly`
	/// file is read if present, otherwise only the vertices of the `.node` file.
	fn read(&self, path: &Path) -> MeshIoResult<Polygon> {
		if has_extension(path, &["poly"]) {
			return Ok(read_poly_file(path, None)?.0);
		}
		let poly_path = path.with_extension("poly");
		if poly_path.is_file() {
			return Ok(read_poly_file(&poly_path, None)?.0);
		}
		let nodes = read_node_file(&path.with_extension("node"))?;
		Ok(Polygon {
			vertices: nodes.vertices,
			..Polygon::default()
		})
	}

	/// Writes the self-contained `.poly` layout.
	fn write_to(&self, polygon: &Polygon, writer: &mut dyn Write) -> MeshIoResult<()> {
		vertex_attribute_count(&polygon.vertices)?;
		let mut writer = TextWriter::new(writer, self.config.precision);
		self.write_self_contained(&mut writer, polygon)?;
		writer.flush()?;
		Ok(())
	}

	fn write(&self, polygon: &Polygon, path: &Path) -> MeshIoResult<()> {
		let attribute_count = vertex_attribute_count(&polygon.vertices).map_err(|e| e.with_path(path))?;
		let first_index = self.first_index();
		let precision = self.config.precision;

		if has_extension(path, &["poly"]) {
			return write_file(path, precision, |w| self.write_self_contained(w, polygon));
		}

		write_file(&path.with_extension("node"), precision, |w| {
			write_nodes(w, &polygon.vertices, first_index)
		})?;
		write_file(&path.with_extension("poly"), precision, |w| {
			write_node_header(w, 0, attribute_count, false)?;
			write_constraints(w, &constraints_of(polygon), first_index)
		})
	}
}

impl MeshFormat for TriangleFormat {
	fn import(&self, path: &Path) -> MeshIoResult<Mesh> {
		let nodes = read_node_file(&path.with_extension("node"))?;

		let poly_path = path.with_extension("poly");
		let (polygon, first_index) = if poly_path.is_file() {
			read_poly_file(&poly_path, Some(nodes))?
		} else {
			let first_index = nodes.first_index;
			(
				Polygon {
					vertices: nodes.vertices,
					..Polygon::default()
				},
				first_index,
			)
		};

		let vertex_count = polygon.vertex_count();
		let triangles = read_ele_file(&path.with_extension("ele"), first_index, vertex_count)?;

		let neigh_path = path.with_extension("neigh");
		let neighbors = if neigh_path.is_file() {
			Some(read_neigh_file(&neigh_path, first_index, triangles.len())?)
		} else {
			None
		};

		let edge_path = path.with_extension("edge");
		let edges = if edge_path.is_file() {
			Some(read_edge_file(&edge_path, first_index, vertex_count)?)
		} else {
			None
		};

		log::debug!(
			"imported {} vertices and {} triangles from '{}'",
			vertex_count,
			triangles.len(),
			path.display()
		);

		Ok(Mesh {
			triangles,
			neighbors,
			edges,
			..Mesh::from(polygon)
		})
	}

	fn export(&self, mesh: &Mesh, path: &Path) -> MeshIoResult<()> {
		let first_index = self.first_index();
		let precision = self.config.precision;

		let attribute_count = vertex_attribute_count(&mesh.vertices).map_err(|e| e.with_path(path))?;
		uniform_attribute_count("triangle", mesh.triangles.iter().map(|t| t.attributes.as_slice()))
			.map_err(|e| e.with_path(path))?;

		write_file(&path.with_extension("node"), precision, |w| {
			write_nodes(w, &mesh.vertices, first_index)
		})?;

		if mesh.has_constraints() {
			write_file(&path.with_extension("poly"), precision, |w| {
				write_node_header(w, 0, attribute_count, false)?;
				write_constraints(
					w,
					&Constraints {
						segments: &mesh.segments,
						holes: &mesh.holes,
						regions: &mesh.regions,
					},
					first_index,
				)
			})?;
		}

		write_file(&path.with_extension("ele"), precision, |w| {
			write_triangles(w, &mesh.triangles, first_index)
		})?;

		if mesh.neighbors.is_some() {
			write_file(&path.with_extension("neigh"), precision, |w| {
				write_neighbors(w, mesh, first_index)
			})?;
		}

		if let Some(edges) = &mesh.edges {
			write_file(&path.with_extension("edge"), precision, |w| {
				write_segments(w, edges, first_index)
			})?;
		}

		Ok(())
	}
}
