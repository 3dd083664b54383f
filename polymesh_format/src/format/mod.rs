//! Built-in file formats.
//!
//! | Format                  | Polygon | Mesh | Extensions              |
//! |-------------------------|:-------:|:----:|-------------------------|
//! | [`TriangleFormat`]      | ✅      | ✅   | `.poly`, `.node`, `.ele` |
//! | [`ObjFormat`]           | ❌      | ✅   | `.obj`                  |
//!
//! The Triangle format reads a polygon from a `.poly` file, or just its vertices
//! from a `.node` file. A mesh is stored as a file set sharing one base name:
//! `.node`, `.ele` and optionally `.poly`, `.neigh` and `.edge`.

#[cfg(any(test, feature = "test"))]
mod mock;
#[cfg(any(test, feature = "test"))]
pub use mock::{MockFormat, MockFormatProfile};

mod obj;
pub use obj::ObjFormat;

mod triangle;
pub use triangle::TriangleFormat;
