//! Formatting helper shared by the text format writers.
//!
//! ```
//! use polymesh_core::io::TextWriter;
//!
//! let mut buffer = Vec::new();
//! let mut writer = TextWriter::new(&mut buffer, Some(2));
//! writer.write_values(&[writer.int(1), writer.float(0.5), writer.float(2.0)]).unwrap();
//! assert_eq!(String::from_utf8(buffer).unwrap(), "1 0.50 2.00\n");
//! ```

use std::io::{Result, Write};

pub struct TextWriter<'a> {
	writer: &'a mut dyn Write,
	precision: Option<usize>,
}

impl<'a> TextWriter<'a> {
	/// `precision` fixes the number of decimals; `None` writes the shortest
	/// representation that parses back to the same value.
	pub fn new(writer: &'a mut dyn Write, precision: Option<usize>) -> Self {
		TextWriter { writer, precision }
	}

	pub fn float(&self, value: f64) -> String {
		match self.precision {
			Some(precision) => format!("{value:.precision$}"),
			None => format!("{value}"),
		}
	}

	pub fn int<T: ToString>(&self, value: T) -> String {
		value.to_string()
	}

	pub fn write_values(&mut self, values: &[String]) -> Result<()> {
		writeln!(self.writer, "{}", values.join(" "))
	}

	pub fn write_comment(&mut self, comment: &str) -> Result<()> {
		writeln!(self.writer, "# {comment}")
	}

	pub fn flush(&mut self) -> Result<()> {
		self.writer.flush()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shortest_representation_round_trips() {
		let mut buffer = Vec::new();
		let writer = TextWriter::new(&mut buffer, None);
		for value in [0.1, 1.0 / 3.0, -2.5e-12, 1e21, 42.0] {
			assert_eq!(writer.float(value).parse::<f64>().unwrap(), value);
		}
		assert_eq!(writer.float(42.0), "42");
	}

	#[test]
	fn comments() {
		let mut buffer = Vec::new();
		let mut writer = TextWriter::new(&mut buffer, None);
		writer.write_comment("generated").unwrap();
		writer.write_values(&["3".to_string(), "2".to_string()]).unwrap();
		writer.flush().unwrap();
		assert_eq!(String::from_utf8(buffer).unwrap(), "# generated\n3 2\n");
	}
}
