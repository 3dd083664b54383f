mod bbox;
mod mesh;
mod point;
mod polygon;

pub use bbox::*;
pub use mesh::*;
pub use point::*;
pub use polygon::*;
