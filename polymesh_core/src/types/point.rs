/// A bare point in the plane, used for hole markers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Point {
		Point { x, y }
	}
}

/// An input or mesh vertex.
///
/// `attributes` are opaque per-vertex values (e.g. elevation), `boundary` is the
/// boundary marker, where `0` means "no marker".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vertex {
	pub x: f64,
	pub y: f64,
	pub attributes: Vec<f64>,
	pub boundary: i32,
}

impl Vertex {
	pub fn new(x: f64, y: f64) -> Vertex {
		Vertex {
			x,
			y,
			attributes: Vec::new(),
			boundary: 0,
		}
	}

	#[must_use]
	pub fn with_boundary(mut self, boundary: i32) -> Vertex {
		self.boundary = boundary;
		self
	}

	#[must_use]
	pub fn with_attributes(mut self, attributes: Vec<f64>) -> Vertex {
		self.attributes = attributes;
		self
	}

	pub fn as_point(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

/// A constrained segment between two vertices, referenced by index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Segment {
	pub p0: usize,
	pub p1: usize,
	pub boundary: i32,
}

impl Segment {
	pub fn new(p0: usize, p1: usize) -> Segment {
		Segment { p0, p1, boundary: 0 }
	}

	#[must_use]
	pub fn with_boundary(mut self, boundary: i32) -> Segment {
		self.boundary = boundary;
		self
	}
}

/// A region marker: every triangle reachable from `point` without crossing a
/// segment gets `attribute`, and is constrained to `max_area` (negative = none).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
	pub point: Point,
	pub attribute: f64,
	pub max_area: f64,
}

impl Region {
	pub fn new(x: f64, y: f64, attribute: f64, max_area: f64) -> Region {
		Region {
			point: Point::new(x, y),
			attribute,
			max_area,
		}
	}
}
