use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Output options shared by the built-in text formats.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WriterConfig {
	/// Fixed number of decimals for coordinates and attributes.
	/// When unset, the shortest representation that round-trips is written.
	pub precision: Option<usize>,

	/// Number of the first vertex/segment/triangle in index based files.
	pub first_index: IndexBase,
}

/// Index base of Triangle files, either `0` or `1`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(try_from = "usize")]
pub enum IndexBase {
	#[default]
	Zero,
	One,
}

impl IndexBase {
	pub fn offset(self) -> usize {
		match self {
			IndexBase::Zero => 0,
			IndexBase::One => 1,
		}
	}
}

impl TryFrom<usize> for IndexBase {
	type Error = String;

	fn try_from(value: usize) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(IndexBase::Zero),
			1 => Ok(IndexBase::One),
			_ => Err(format!("first index must be 0 or 1, got {value}")),
		}
	}
}

impl Display for IndexBase {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.offset())
	}
}
