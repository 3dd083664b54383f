//! Writers for the files of a Triangle file set.

use super::FORMAT;
use polymesh_core::{
	Mesh, MeshIoError, MeshIoResult, Point, Region, Segment, Triangle, Vertex,
	io::TextWriter,
};
use std::{
	fs::File,
	io::{BufWriter, Result},
	path::Path,
};

/// Segments, holes and regions of a `.poly` file.
pub struct Constraints<'a> {
	pub segments: &'a [Segment],
	pub holes: &'a [Point],
	pub regions: &'a [Region],
}

/// The attribute count shared by all `items`.
///
/// A Triangle header declares one count for the whole list, so differing lengths
/// are rejected before anything is written. The error has no file name yet;
/// callers that write to a path attach it with [`MeshIoError::with_path`].
pub fn uniform_attribute_count<'a>(what: &str, items: impl Iterator<Item = &'a [f64]>) -> MeshIoResult<usize> {
	let mut expected = None;
	for (i, attributes) in items.enumerate() {
		match expected {
			None => expected = Some(attributes.len()),
			Some(n) if n != attributes.len() => {
				return Err(MeshIoError::format(
					FORMAT,
					"",
					format!("{what} {i} has {} attributes, expected {n}", attributes.len()),
				));
			}
			Some(_) => {}
		}
	}
	Ok(expected.unwrap_or(0))
}

/// Node section: header plus one line per vertex.
pub fn write_nodes(writer: &mut TextWriter, vertices: &[Vertex], first_index: usize) -> Result<()> {
	let attribute_count = vertices.first().map_or(0, |v| v.attributes.len());
	let has_markers = vertices.iter().any(|v| v.boundary != 0);
	write_node_header(writer, vertices.len(), attribute_count, has_markers)?;

	for (i, vertex) in vertices.iter().enumerate() {
		let mut values = vec![writer.int(first_index + i), writer.float(vertex.x), writer.float(vertex.y)];
		values.extend(vertex.attributes.iter().map(|a| writer.float(*a)));
		if has_markers {
			values.push(writer.int(vertex.boundary));
		}
		writer.write_values(&values)?;
	}
	Ok(())
}

pub fn write_node_header(
	writer: &mut TextWriter,
	count: usize,
	attribute_count: usize,
	has_markers: bool,
) -> Result<()> {
	writer.write_values(&[
		writer.int(count),
		writer.int(2),
		writer.int(attribute_count),
		writer.int(u8::from(has_markers)),
	])
}

/// Segment, hole and region sections of a `.poly` file. The region section is
/// omitted when there are no regions.
pub fn write_constraints(writer: &mut TextWriter, constraints: &Constraints, first_index: usize) -> Result<()> {
	write_segments(writer, constraints.segments, first_index)?;

	writer.write_values(&[writer.int(constraints.holes.len())])?;
	for (i, hole) in constraints.holes.iter().enumerate() {
		writer.write_values(&[writer.int(first_index + i), writer.float(hole.x), writer.float(hole.y)])?;
	}

	if !constraints.regions.is_empty() {
		writer.write_values(&[writer.int(constraints.regions.len())])?;
		for (i, region) in constraints.regions.iter().enumerate() {
			writer.write_values(&[
				writer.int(first_index + i),
				writer.float(region.point.x),
				writer.float(region.point.y),
				writer.float(region.attribute),
				writer.float(region.max_area),
			])?;
		}
	}
	Ok(())
}

/// Segment list as used by `.poly` and `.edge` files.
pub fn write_segments(writer: &mut TextWriter, segments: &[Segment], first_index: usize) -> Result<()> {
	let has_markers = segments.iter().any(|s| s.boundary != 0);
	writer.write_values(&[writer.int(segments.len()), writer.int(u8::from(has_markers))])?;
	for (i, segment) in segments.iter().enumerate() {
		let mut values = vec![
			writer.int(first_index + i),
			writer.int(first_index + segment.p0),
			writer.int(first_index + segment.p1),
		];
		if has_markers {
			values.push(writer.int(segment.boundary));
		}
		writer.write_values(&values)?;
	}
	Ok(())
}

pub fn write_triangles(writer: &mut TextWriter, triangles: &[Triangle], first_index: usize) -> Result<()> {
	let attribute_count = triangles.first().map_or(0, |t| t.attributes.len());
	writer.write_values(&[writer.int(triangles.len()), writer.int(3), writer.int(attribute_count)])?;
	for (i, triangle) in triangles.iter().enumerate() {
		let mut values = vec![writer.int(first_index + i)];
		values.extend(triangle.vertices.iter().map(|v| writer.int(first_index + v)));
		values.extend(triangle.attributes.iter().map(|a| writer.float(*a)));
		writer.write_values(&values)?;
	}
	Ok(())
}

pub fn write_neighbors(writer: &mut TextWriter, mesh: &Mesh, first_index: usize) -> Result<()> {
	let neighbors = mesh.neighbors.as_deref().unwrap_or_default();
	writer.write_values(&[writer.int(neighbors.len()), writer.int(3)])?;
	for (i, entry) in neighbors.iter().enumerate() {
		let mut values = vec![writer.int(first_index + i)];
		values.extend(entry.iter().map(|neighbor| match neighbor {
			Some(n) => writer.int(first_index + n),
			None => writer.int(-1),
		}));
		writer.write_values(&values)?;
	}
	Ok(())
}

/// Creates `path` and runs `write` on a buffered text writer for it.
pub fn write_file(
	path: &Path,
	precision: Option<usize>,
	write: impl FnOnce(&mut TextWriter) -> Result<()>,
) -> MeshIoResult<()> {
	log::trace!("write '{}'", path.display());
	let file = File::create(path).map_err(|e| MeshIoError::io(path, e))?;
	let mut buffer = BufWriter::new(file);
	let mut writer = TextWriter::new(&mut buffer, precision);
	write(&mut writer)
		.and_then(|()| writer.flush())
		.map_err(|e| MeshIoError::io(path, e))
}
