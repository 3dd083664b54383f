//! Computed triangulation with optional topology.

use super::{BBox, Point, Polygon, Region, Segment, Vertex};

/// A triangle referencing three mesh vertices in counter-clockwise order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangle {
	pub vertices: [usize; 3],
	pub attributes: Vec<f64>,
}

impl Triangle {
	pub fn new(v0: usize, v1: usize, v2: usize) -> Triangle {
		Triangle {
			vertices: [v0, v1, v2],
			attributes: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_attributes(mut self, attributes: Vec<f64>) -> Triangle {
		self.attributes = attributes;
		self
	}
}

/// Neighbors of a triangle; entry `i` is the triangle opposite vertex `i`.
pub type Neighbors = [Option<usize>; 3];

/// A triangle mesh.
///
/// `segments`, `holes` and `regions` carry over the constraints of the polygon
/// the mesh was generated from. `neighbors` and `edges` are optional topology;
/// when present, `neighbors` has one entry per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
	pub vertices: Vec<Vertex>,
	pub triangles: Vec<Triangle>,
	pub segments: Vec<Segment>,
	pub holes: Vec<Point>,
	pub regions: Vec<Region>,
	pub neighbors: Option<Vec<Neighbors>>,
	pub edges: Option<Vec<Segment>>,
}

impl Mesh {
	pub fn new() -> Mesh {
		Mesh::default()
	}

	pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
		self.vertices.push(vertex);
		self.vertices.len() - 1
	}

	pub fn add_triangle(&mut self, triangle: Triangle) -> usize {
		self.triangles.push(triangle);
		self.triangles.len() - 1
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn triangle_count(&self) -> usize {
		self.triangles.len()
	}

	pub fn attribute_count(&self) -> usize {
		self.vertices.first().map_or(0, |v| v.attributes.len())
	}

	pub fn triangle_attribute_count(&self) -> usize {
		self.triangles.first().map_or(0, |t| t.attributes.len())
	}

	/// Whether the mesh carries constraints that belong in a `.poly`-style section.
	pub fn has_constraints(&self) -> bool {
		!self.segments.is_empty() || !self.holes.is_empty() || !self.regions.is_empty()
	}

	pub fn bbox(&self) -> Option<BBox> {
		BBox::from_points(self.vertices.iter().map(|v| (v.x, v.y)))
	}
}

impl From<Polygon> for Mesh {
	/// Moves the polygon's vertices and constraints into a mesh without triangles.
	fn from(polygon: Polygon) -> Self {
		Mesh {
			vertices: polygon.vertices,
			segments: polygon.segments,
			holes: polygon.holes,
			regions: polygon.regions,
			..Mesh::default()
		}
	}
}

impl From<&Mesh> for Polygon {
	/// Extracts the vertices and constraints of a mesh, dropping triangles and topology.
	fn from(mesh: &Mesh) -> Self {
		Polygon {
			vertices: mesh.vertices.clone(),
			segments: mesh.segments.clone(),
			holes: mesh.holes.clone(),
			regions: mesh.regions.clone(),
		}
	}
}
