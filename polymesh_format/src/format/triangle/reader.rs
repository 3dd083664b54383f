//! Parsers for the individual files of a Triangle file set.
//!
//! The first vertex number of the node section (0 or 1) is the index base for all
//! indices in the set; every referenced index is range checked against it.
//! Header counts are not trusted for preallocation, lists grow as lines are read.

use super::FORMAT;
use polymesh_core::{
	MeshIoResult, Neighbors, Point, Polygon, Region, Segment, Triangle, Vertex,
	io::{LineReader, Tokens},
};
use std::{io::BufRead, path::Path};

/// Vertices of a node section and the number of the first vertex.
pub struct NodeSection {
	pub vertices: Vec<Vertex>,
	pub first_index: usize,
}

/// Reads a `.node` file. Anything after the vertex list is ignored.
pub fn read_node_file(path: &Path) -> MeshIoResult<NodeSection> {
	let mut reader = LineReader::open(path, FORMAT)?;
	read_node_section(&mut reader)
}

/// Reads a `.poly` file.
///
/// If the file declares zero vertices, they are taken from `nodes`, or from the
/// sibling `.node` file when `nodes` is `None` and that file exists. Without
/// either the polygon has no vertices.
pub fn read_poly_file(path: &Path, nodes: Option<NodeSection>) -> MeshIoResult<(Polygon, usize)> {
	let mut reader = LineReader::open(path, FORMAT)?;

	let mut section = read_node_section(&mut reader)?;
	if section.vertices.is_empty() {
		let node_path = path.with_extension("node");
		if let Some(nodes) = nodes {
			section = nodes;
		} else if node_path.is_file() {
			section = read_node_file(&node_path)?;
		}
	}
	let first_index = section.first_index;
	let vertex_count = section.vertices.len();

	let mut polygon = Polygon {
		vertices: section.vertices,
		..Polygon::default()
	};

	let header = reader.expect_line("segment header")?;
	let segment_count: usize = header.parse(0, "segment count")?;
	let has_markers = marker_flag(&header, 1)?;
	for _ in 0..segment_count {
		let tokens = reader.expect_line("segment")?;
		polygon.segments.push(parse_segment(&tokens, has_markers, first_index, vertex_count)?);
	}

	if let Some(header) = reader.next_line()? {
		let hole_count: usize = header.parse(0, "hole count")?;
		for _ in 0..hole_count {
			let tokens = reader.expect_line("hole")?;
			tokens.require(3, "hole")?;
			polygon.holes.push(Point::new(tokens.parse(1, "x")?, tokens.parse(2, "y")?));
		}
	}

	if let Some(header) = reader.next_line()? {
		let region_count: usize = header.parse(0, "region count")?;
		for _ in 0..region_count {
			let tokens = reader.expect_line("region")?;
			tokens.require(4, "region")?;
			polygon.regions.push(Region::new(
				tokens.parse(1, "x")?,
				tokens.parse(2, "y")?,
				tokens.parse(3, "regional attribute")?,
				tokens.parse_opt(4, "maximum area")?.unwrap_or(-1.0),
			));
		}
	}

	Ok((polygon, first_index))
}

/// Reads the triangles of an `.ele` file.
pub fn read_ele_file(path: &Path, first_index: usize, vertex_count: usize) -> MeshIoResult<Vec<Triangle>> {
	let mut reader = LineReader::open(path, FORMAT)?;

	let header = reader.expect_line("element header")?;
	let count: usize = header.parse(0, "triangle count")?;
	let corners: usize = header.parse_opt(1, "nodes per triangle")?.unwrap_or(3);
	let attribute_count: usize = header.parse_opt(2, "attribute count")?.unwrap_or(0);
	if corners < 3 {
		return Err(header.error(format!("a triangle needs at least 3 nodes, got {corners}")));
	}
	if corners > 3 {
		log::warn!(
			"'{}': ignoring {} extra nodes per triangle",
			path.display(),
			corners - 3
		);
	}

	let mut triangles = Vec::new();
	for _ in 0..count {
		let tokens = reader.expect_line("triangle")?;
		tokens.require(corners.saturating_add(attribute_count).saturating_add(1), "triangle")?;
		let mut vertices = [0; 3];
		for (corner, vertex) in vertices.iter_mut().enumerate() {
			*vertex = vertex_index(&tokens, 1 + corner, first_index, vertex_count, "triangle corner")?;
		}
		let attributes = (0..attribute_count)
			.map(|i| tokens.parse(1 + corners + i, "triangle attribute"))
			.collect::<MeshIoResult<Vec<f64>>>()?;
		triangles.push(Triangle { vertices, attributes });
	}
	Ok(triangles)
}

/// Reads a `.neigh` file; `-1` marks a missing neighbor.
pub fn read_neigh_file(path: &Path, first_index: usize, triangle_count: usize) -> MeshIoResult<Vec<Neighbors>> {
	let mut reader = LineReader::open(path, FORMAT)?;

	let header = reader.expect_line("neighbor header")?;
	let count: usize = header.parse(0, "triangle count")?;
	if count != triangle_count {
		return Err(header.error(format!(
			"neighbor list covers {count} triangles, but the mesh has {triangle_count}"
		)));
	}

	let mut neighbors = Vec::new();
	for _ in 0..count {
		let tokens = reader.expect_line("neighbors")?;
		tokens.require(4, "neighbors")?;
		let mut entry: Neighbors = [None; 3];
		for (i, neighbor) in entry.iter_mut().enumerate() {
			let value: i64 = tokens.parse(1 + i, "neighbor")?;
			if value >= 0 {
				*neighbor = Some(index_in_range(&tokens, value as usize, first_index, triangle_count, "neighbor")?);
			}
		}
		neighbors.push(entry);
	}
	Ok(neighbors)
}

/// Reads the edge list of an `.edge` file.
pub fn read_edge_file(path: &Path, first_index: usize, vertex_count: usize) -> MeshIoResult<Vec<Segment>> {
	let mut reader = LineReader::open(path, FORMAT)?;

	let header = reader.expect_line("edge header")?;
	let count: usize = header.parse(0, "edge count")?;
	let has_markers = marker_flag(&header, 1)?;

	let mut edges = Vec::new();
	for _ in 0..count {
		let tokens = reader.expect_line("edge")?;
		edges.push(parse_segment(&tokens, has_markers, first_index, vertex_count)?);
	}
	Ok(edges)
}

fn read_node_section<R: BufRead>(reader: &mut LineReader<R>) -> MeshIoResult<NodeSection> {
	let header = reader.expect_line("node header")?;
	let count: usize = header.parse(0, "vertex count")?;
	let dimension: usize = header.parse_opt(1, "dimension")?.unwrap_or(2);
	if dimension != 2 {
		return Err(header.error(format!("dimension must be 2, got {dimension}")));
	}
	let attribute_count: usize = header.parse_opt(2, "attribute count")?.unwrap_or(0);
	let has_markers = marker_flag(&header, 3)?;

	let mut first_index = 0;
	let mut vertices = Vec::new();
	for i in 0..count {
		let tokens = reader.expect_line("vertex")?;
		tokens.require(attribute_count.saturating_add(3), "vertex")?;
		if i == 0 {
			first_index = tokens.parse(0, "vertex number")?;
			if first_index > 1 {
				return Err(tokens.error(format!("first vertex must be numbered 0 or 1, got {first_index}")));
			}
		}
		let attributes = (0..attribute_count)
			.map(|j| tokens.parse(3 + j, "vertex attribute"))
			.collect::<MeshIoResult<Vec<f64>>>()?;
		let boundary = if has_markers {
			tokens.parse_opt(3 + attribute_count, "boundary marker")?.unwrap_or(0)
		} else {
			0
		};
		vertices.push(Vertex {
			x: tokens.parse(1, "x")?,
			y: tokens.parse(2, "y")?,
			attributes,
			boundary,
		});
	}

	Ok(NodeSection { vertices, first_index })
}

fn parse_segment(tokens: &Tokens, has_markers: bool, first_index: usize, vertex_count: usize) -> MeshIoResult<Segment> {
	tokens.require(3, "segment")?;
	let boundary = if has_markers {
		tokens.parse_opt(3, "boundary marker")?.unwrap_or(0)
	} else {
		0
	};
	Ok(Segment {
		p0: vertex_index(tokens, 1, first_index, vertex_count, "endpoint")?,
		p1: vertex_index(tokens, 2, first_index, vertex_count, "endpoint")?,
		boundary,
	})
}

fn marker_flag(header: &Tokens, position: usize) -> MeshIoResult<bool> {
	match header.parse_opt::<usize>(position, "boundary marker count")? {
		None | Some(0) => Ok(false),
		Some(1) => Ok(true),
		Some(n) => Err(header.error(format!("boundary marker count must be 0 or 1, got {n}"))),
	}
}

fn vertex_index(tokens: &Tokens, position: usize, first_index: usize, count: usize, what: &str) -> MeshIoResult<usize> {
	let value: usize = tokens.parse(position, what)?;
	index_in_range(tokens, value, first_index, count, what)
}

fn index_in_range(tokens: &Tokens, value: usize, first_index: usize, count: usize, what: &str) -> MeshIoResult<usize> {
	if value < first_index || value - first_index >= count {
		return Err(tokens.error(format!(
			"{what} {value} out of range {first_index}..{}",
			first_index + count
		)));
	}
	Ok(value - first_index)
}
