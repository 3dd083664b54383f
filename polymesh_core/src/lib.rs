//! Data model, error type and text I/O helpers shared by the polymesh crates.
//!
//! - [`Polygon`]: planar straight-line graph (vertices, segments, holes, regions)
//! - [`Mesh`]: triangulation with optional neighbor and edge topology
//! - [`MeshIoError`]: I/O, format and unsupported-format failures

mod error;
pub use error::*;

pub mod io;

mod types;
pub use types::*;
