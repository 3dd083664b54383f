//! Planar straight-line graph used as input for meshing.

use super::{BBox, Point, Region, Segment, Vertex};

/// Polygon geometry: vertices, segments, holes and region markers.
///
/// No geometric consistency is enforced here; segment indices are only checked
/// by the formats that read them.
///
/// ```
/// use polymesh_core::{Polygon, Vertex};
///
/// let mut polygon = Polygon::new();
/// let a = polygon.add_vertex(Vertex::new(0.0, 0.0));
/// let b = polygon.add_vertex(Vertex::new(1.0, 0.0));
/// polygon.add_segment(a, b, 1);
/// assert_eq!(polygon.vertex_count(), 2);
/// assert_eq!(polygon.segment_count(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
	pub vertices: Vec<Vertex>,
	pub segments: Vec<Segment>,
	pub holes: Vec<Point>,
	pub regions: Vec<Region>,
}

impl Polygon {
	pub fn new() -> Polygon {
		Polygon::default()
	}

	/// Appends a vertex and returns its index.
	pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
		self.vertices.push(vertex);
		self.vertices.len() - 1
	}

	pub fn add_segment(&mut self, p0: usize, p1: usize, boundary: i32) {
		self.segments.push(Segment::new(p0, p1).with_boundary(boundary));
	}

	pub fn add_hole(&mut self, x: f64, y: f64) {
		self.holes.push(Point::new(x, y));
	}

	pub fn add_region(&mut self, region: Region) {
		self.regions.push(region);
	}

	/// Adds a closed ring of vertices connected by segments carrying `boundary`.
	pub fn add_ring(&mut self, points: &[(f64, f64)], boundary: i32) {
		let first = self.vertices.len();
		for &(x, y) in points {
			self.add_vertex(Vertex::new(x, y).with_boundary(boundary));
		}
		let n = points.len();
		for i in 0..n {
			self.add_segment(first + i, first + (i + 1) % n, boundary);
		}
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn segment_count(&self) -> usize {
		self.segments.len()
	}

	/// Number of per-vertex attributes, taken from the first vertex.
	pub fn attribute_count(&self) -> usize {
		self.vertices.first().map_or(0, |v| v.attributes.len())
	}

	pub fn has_vertex_markers(&self) -> bool {
		self.vertices.iter().any(|v| v.boundary != 0)
	}

	pub fn has_segment_markers(&self) -> bool {
		self.segments.iter().any(|s| s.boundary != 0)
	}

	pub fn bbox(&self) -> Option<BBox> {
		BBox::from_points(self.vertices.iter().map(|v| (v.x, v.y)))
	}
}
