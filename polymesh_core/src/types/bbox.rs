use std::fmt::{Debug, Display, Formatter};

/// An axis-aligned bounding box in the plane.
///
/// ```
/// use polymesh_core::BBox;
///
/// let mut bbox = BBox::from_point(1.0, 2.0);
/// bbox.include(-1.0, 5.0);
/// assert_eq!(bbox.as_tuple(), (-1.0, 2.0, 1.0, 5.0));
/// assert_eq!(bbox.width(), 2.0);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct BBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl BBox {
	pub fn from_point(x: f64, y: f64) -> BBox {
		BBox {
			x_min: x,
			y_min: y,
			x_max: x,
			y_max: y,
		}
	}

	/// Computes the bounding box of a sequence of points, `None` if it is empty.
	pub fn from_points(mut points: impl Iterator<Item = (f64, f64)>) -> Option<BBox> {
		let (x, y) = points.next()?;
		let mut bbox = BBox::from_point(x, y);
		for (x, y) in points {
			bbox.include(x, y);
		}
		Some(bbox)
	}

	pub fn include(&mut self, x: f64, y: f64) {
		self.x_min = self.x_min.min(x);
		self.y_min = self.y_min.min(y);
		self.x_max = self.x_max.max(x);
		self.y_max = self.y_max.max(y);
	}

	pub fn width(&self) -> f64 {
		self.x_max - self.x_min
	}

	pub fn height(&self) -> f64 {
		self.y_max - self.y_min
	}

	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "BBox({self})")
	}
}

impl Display for BBox {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_iterator_has_no_bbox() {
		assert_eq!(BBox::from_points(std::iter::empty()), None);
	}

	#[test]
	fn from_points() {
		let bbox = BBox::from_points([(0.0, 0.0), (4.0, -1.0), (2.0, 3.0)].into_iter()).unwrap();
		assert_eq!(bbox.as_tuple(), (0.0, -1.0, 4.0, 3.0));
		assert_eq!(bbox.height(), 4.0);
		assert_eq!(format!("{bbox:?}"), "BBox([0, -1, 4, 3])");
	}
}
