//! Text reading and writing helpers for line based mesh formats.

mod line_reader;
mod text_writer;

pub use line_reader::*;
pub use text_writer::*;
