//! Wavefront OBJ, as exchanged with 3D tools.
//!
//! Only meshes are supported. Vertices are written with `z = 0` and faces with
//! 1-based indices; on import the `z` coordinate is dropped and polygonal faces
//! are fan-triangulated. Topology, markers and attributes are not stored.

use crate::{FileFormat, MeshFormat, WriterConfig, has_extension};
use polymesh_core::{
	Mesh, MeshIoError, MeshIoResult, Triangle, Vertex,
	io::{LineReader, TextWriter, Tokens},
};
use std::{
	collections::BTreeSet,
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

const FORMAT: &str = "obj";

#[derive(Clone, Debug, Default)]
pub struct ObjFormat {
	config: WriterConfig,
}

impl ObjFormat {
	pub fn new(config: WriterConfig) -> ObjFormat {
		ObjFormat { config }
	}

	/// Serializes `mesh` into any byte sink.
	pub fn write_to(&self, mesh: &Mesh, writer: &mut dyn Write) -> MeshIoResult<()> {
		let mut writer = TextWriter::new(writer, self.config.precision);
		writer.write_comment(&format!(
			"{} vertices, {} triangles",
			mesh.vertex_count(),
			mesh.triangle_count()
		))?;
		for vertex in &mesh.vertices {
			writer.write_values(&[
				"v".to_string(),
				writer.float(vertex.x),
				writer.float(vertex.y),
				writer.float(0.0),
			])?;
		}
		for triangle in &mesh.triangles {
			let mut values = vec!["f".to_string()];
			values.extend(triangle.vertices.iter().map(|v| writer.int(v + 1)));
			writer.write_values(&values)?;
		}
		writer.flush()?;
		Ok(())
	}
}

impl FileFormat for ObjFormat {
	fn name(&self) -> &str {
		FORMAT
	}

	fn extensions(&self) -> &[&str] {
		&["obj"]
	}

	fn is_supported(&self, path: &Path) -> bool {
		has_extension(path, &["obj"])
	}

	fn as_mesh_format(&self) -> Option<&dyn MeshFormat> {
		Some(self)
	}
}

impl MeshFormat for ObjFormat {
	fn import(&self, path: &Path) -> MeshIoResult<Mesh> {
		let mut reader = LineReader::open(path, FORMAT)?;
		let mut mesh = Mesh::new();
		let mut ignored = BTreeSet::new();

		while let Some(tokens) = reader.next_line()? {
			match tokens.get(0) {
				Some("v") => {
					tokens.require(3, "vertex")?;
					mesh.add_vertex(Vertex::new(tokens.parse(1, "x")?, tokens.parse(2, "y")?));
				}
				Some("f") => {
					tokens.require(4, "face")?;
					let corners = (1..tokens.len())
						.map(|i| face_index(&tokens, i, mesh.vertex_count()))
						.collect::<MeshIoResult<Vec<usize>>>()?;
					for i in 1..corners.len() - 1 {
						mesh.add_triangle(Triangle::new(corners[0], corners[i], corners[i + 1]));
					}
				}
				Some(other) => {
					ignored.insert(other.to_string());
				}
				None => {}
			}
		}

		if !ignored.is_empty() {
			log::warn!(
				"'{}': ignored OBJ statements: {}",
				path.display(),
				ignored.into_iter().collect::<Vec<_>>().join(", ")
			);
		}
		Ok(mesh)
	}

	fn export(&self, mesh: &Mesh, path: &Path) -> MeshIoResult<()> {
		let file = File::create(path).map_err(|e| MeshIoError::io(path, e))?;
		let mut writer = BufWriter::new(file);
		self.write_to(mesh, &mut writer).map_err(|e| e.with_path(path))
	}
}

/// Resolves a face reference like `3`, `3/1`, `3//2` or `-1` to a 0-based vertex index.
fn face_index(tokens: &Tokens, position: usize, vertex_count: usize) -> MeshIoResult<usize> {
	let reference = tokens.get(position).unwrap_or_default();
	let vertex = reference.split('/').next().unwrap_or_default();
	let value: i64 = vertex
		.parse()
		.map_err(|_| tokens.error(format!("invalid face vertex '{reference}'")))?;

	let index = if value < 0 {
		vertex_count as i64 + value
	} else {
		value - 1
	};
	if index < 0 || index >= vertex_count as i64 {
		return Err(tokens.error(format!("face vertex {value} out of range, {vertex_count} vertices defined")));
	}
	Ok(index as usize)
}

#[cfg(test)]
mod tests {
	use super::*;
	use assert_fs::{TempDir, prelude::*};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn square() -> Mesh {
		let mut mesh = Mesh::new();
		for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
			mesh.add_vertex(Vertex::new(x, y));
		}
		mesh.add_triangle(Triangle::new(0, 1, 2));
		mesh.add_triangle(Triangle::new(0, 2, 3));
		mesh
	}

	#[test]
	fn is_mesh_only() {
		let format = ObjFormat::default();
		assert!(format.as_polygon_format().is_none());
		assert!(format.as_mesh_format().is_some());
		assert!(format.is_supported(Path::new("bunny.OBJ")));
		assert!(!format.is_supported(Path::new("bunny.mtl")));
	}

	#[test]
	fn write_layout() -> anyhow::Result<()> {
		let mut buffer = Vec::new();
		ObjFormat::default().write_to(&square(), &mut buffer)?;
		assert_eq!(
			String::from_utf8(buffer)?,
			"# 4 vertices, 2 triangles\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n"
		);
		Ok(())
	}

	#[test]
	fn round_trip() -> anyhow::Result<()> {
		let dir = TempDir::new()?;
		let path = dir.path().join("square.obj");
		let format = ObjFormat::default();
		format.export(&square(), &path)?;
		assert_eq!(format.import(&path)?, square());
		Ok(())
	}

	#[test]
	fn import_quads_and_relative_indices() -> anyhow::Result<()> {
		let dir = TempDir::new()?;
		let file = dir.child("quad.obj");
		file.write_str("o quad\nv 0 0 5\nv 1 0 5\nv 1 1 5\nv 0 1 5\nvn 0 0 1\nf 1//1 2//1 3//1 4//1\nf -4/1 -2 -1\n")?;

		let mesh = ObjFormat::default().import(file.path())?;
		assert_eq!(mesh.vertex_count(), 4);
		assert_eq!(
			mesh.triangles,
			vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3), Triangle::new(0, 2, 3)]
		);
		Ok(())
	}

	#[rstest]
	#[case("v 0 0\nf 1 2 3\n", "face vertex 2 out of range, 1 vertices defined")]
	#[case("v 0\n", "expected at least 3 values for vertex, found 2")]
	#[case("v 0 0\nv 1 0\nv 0 1\nf 1 x 3\n", "invalid face vertex 'x'")]
	#[case("v 0 0\nv 1 0\nf 1 2\n", "expected at least 4 values for face, found 3")]
	fn grammar_violations(#[case] content: &str, #[case] message: &str) -> anyhow::Result<()> {
		let dir = TempDir::new()?;
		let file = dir.child("bad.obj");
		file.write_str(content)?;
		match ObjFormat::default().import(file.path()).unwrap_err() {
			MeshIoError::Format { message: m, .. } => assert_eq!(m, message),
			other => panic!("unexpected error {other:?}"),
		}
		Ok(())
	}
}
