//! Line oriented tokenizer for the text formats.
//!
//! Comments start with `#` and run to the end of the line; blank lines are skipped.
//! Content must be UTF-8, anything else is a format error.
//! Every error produced while parsing carries the format name, the file name and the
//! 1-based line number.
//!
//! ```
//! use polymesh_core::io::LineReader;
//!
//! let text = "# header\n3 2 0 0\n\n0 1.5 2.5 # first\n";
//! let mut reader = LineReader::new(text.as_bytes(), "triangle", "demo.node");
//!
//! let header = reader.expect_line("header").unwrap();
//! assert_eq!(header.parse::<usize>(0, "vertex count").unwrap(), 3);
//!
//! let vertex = reader.expect_line("vertex").unwrap();
//! assert_eq!(vertex.line(), 4);
//! assert_eq!(vertex.parse::<f64>(2, "y").unwrap(), 2.5);
//! assert!(reader.next_line().unwrap().is_none());
//! ```

use crate::{MeshIoError, MeshIoResult};
use std::{
	fs::File,
	io::{BufRead, BufReader, ErrorKind},
	path::Path,
	str::FromStr,
	sync::Arc,
};

#[derive(Debug)]
pub struct LineReader<R: BufRead> {
	reader: R,
	format: &'static str,
	file: Arc<str>,
	line: usize,
	buffer: String,
}

impl LineReader<BufReader<File>> {
	/// Opens `path` for reading. Failing to open it is an I/O error.
	pub fn open(path: &Path, format: &'static str) -> MeshIoResult<Self> {
		let file = File::open(path).map_err(|e| MeshIoError::io(path, e))?;
		Ok(LineReader::new(
			BufReader::new(file),
			format,
			path.to_string_lossy().as_ref(),
		))
	}
}

impl<R: BufRead> LineReader<R> {
	pub fn new(reader: R, format: &'static str, file: &str) -> Self {
		LineReader {
			reader,
			format,
			file: Arc::from(file),
			line: 0,
			buffer: String::new(),
		}
	}

	/// Returns the tokens of the next line that has any, or `None` at the end of input.
	pub fn next_line(&mut self) -> MeshIoResult<Option<Tokens>> {
		loop {
			self.buffer.clear();
			let read = match self.reader.read_line(&mut self.buffer) {
				Ok(read) => read,
				Err(e) if e.kind() == ErrorKind::InvalidData => {
					self.line += 1;
					return Err(self.error("invalid UTF-8"));
				}
				Err(e) => return Err(MeshIoError::io(Path::new(self.file.as_ref()), e)),
			};
			if read == 0 {
				return Ok(None);
			}
			self.line += 1;

			let content = match self.buffer.find('#') {
				Some(pos) => &self.buffer[..pos],
				None => self.buffer.as_str(),
			};
			let values: Vec<String> = content.split_whitespace().map(str::to_string).collect();
			if !values.is_empty() {
				return Ok(Some(Tokens {
					values,
					line: self.line,
					format: self.format,
					file: self.file.clone(),
				}));
			}
		}
	}

	/// Like [`LineReader::next_line`], but running out of input is a format error.
	pub fn expect_line(&mut self, what: &str) -> MeshIoResult<Tokens> {
		self
			.next_line()?
			.ok_or_else(|| self.error(format!("unexpected end of file, expected {what}")))
	}

	/// A format error located at the last line read.
	pub fn error(&self, message: impl Into<String>) -> MeshIoError {
		MeshIoError::Format {
			format: self.format,
			file: self.file.to_string(),
			line: self.line,
			message: message.into(),
		}
	}

	pub fn line(&self) -> usize {
		self.line
	}
}

/// The whitespace separated tokens of a single line.
#[derive(Debug)]
pub struct Tokens {
	values: Vec<String>,
	line: usize,
	format: &'static str,
	file: Arc<str>,
}

impl Tokens {
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn line(&self) -> usize {
		self.line
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.values.get(index).map(String::as_str)
	}

	/// Parses the token at `index`; a missing or malformed token is a format error naming `what`.
	pub fn parse<T: FromStr>(&self, index: usize, what: &str) -> MeshIoResult<T> {
		let value = self
			.get(index)
			.ok_or_else(|| self.error(format!("missing {what}")))?;
		value
			.parse::<T>()
			.map_err(|_| self.error(format!("invalid {what} '{value}'")))
	}

	/// Parses the token at `index` if the line has one.
	pub fn parse_opt<T: FromStr>(&self, index: usize, what: &str) -> MeshIoResult<Option<T>> {
		if index < self.values.len() {
			self.parse(index, what).map(Some)
		} else {
			Ok(None)
		}
	}

	/// Requires at least `count` tokens on this line.
	pub fn require(&self, count: usize, what: &str) -> MeshIoResult<()> {
		if self.values.len() < count {
			return Err(self.error(format!(
				"expected at least {count} values for {what}, found {}",
				self.values.len()
			)));
		}
		Ok(())
	}

	pub fn error(&self, message: impl Into<String>) -> MeshIoError {
		MeshIoError::Format {
			format: self.format,
			file: self.file.to_string(),
			line: self.line,
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn reader(text: &str) -> LineReader<&[u8]> {
		LineReader::new(text.as_bytes(), "test", "input.txt")
	}

	#[test]
	fn skips_comments_and_blank_lines() -> MeshIoResult<()> {
		let mut reader = reader("# only a comment\n\n   \n1 2 # trailing\n#\n3\n");
		let first = reader.expect_line("first")?;
		assert_eq!(first.len(), 2);
		assert_eq!(first.line(), 4);
		let second = reader.expect_line("second")?;
		assert_eq!(second.get(0), Some("3"));
		assert_eq!(second.line(), 6);
		assert!(reader.next_line()?.is_none());
		Ok(())
	}

	#[test]
	fn end_of_file_is_format_error() {
		let mut reader = reader("1\n");
		reader.expect_line("header").unwrap();
		let err = reader.expect_line("segment header").unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid test file 'input.txt', line 1: unexpected end of file, expected segment header"
		);
	}

	#[rstest]
	#[case("1 x", 1, "invalid y 'x'")]
	#[case("1", 1, "missing y")]
	#[case("1 2.5", 1, "invalid y '2.5'")]
	fn parse_errors(#[case] line: &str, #[case] index: usize, #[case] message: &str) {
		let tokens = reader(line).expect_line("line").unwrap();
		match tokens.parse::<i32>(index, "y").unwrap_err() {
			MeshIoError::Format { line, message: m, .. } => {
				assert_eq!(line, 1);
				assert_eq!(m, message);
			}
			other => panic!("unexpected error {other:?}"),
		}
	}

	#[test]
	fn optional_values() -> MeshIoResult<()> {
		let tokens = reader("0 1.0 2.0 5").expect_line("vertex")?;
		assert_eq!(tokens.parse_opt::<i32>(3, "marker")?, Some(5));
		assert_eq!(tokens.parse_opt::<i32>(4, "marker")?, None);
		assert!(tokens.require(5, "vertex").is_err());
		assert!(tokens.require(4, "vertex").is_ok());
		Ok(())
	}

	#[test]
	fn invalid_utf8_is_format_error() {
		let mut reader = LineReader::new(&b"3 2 0 0\n0 \xff\xfe 0\n"[..], "triangle", "bad.poly");
		reader.expect_line("header").unwrap();
		match reader.expect_line("vertex").unwrap_err() {
			MeshIoError::Format { line, message, .. } => {
				assert_eq!(line, 2);
				assert_eq!(message, "invalid UTF-8");
			}
			other => panic!("unexpected error {other:?}"),
		}
	}

	#[test]
	fn missing_file_is_io_error() {
		let err = LineReader::open(Path::new("/definitely/not/here.node"), "triangle").unwrap_err();
		assert!(matches!(err, MeshIoError::Io { path: Some(_), .. }));
	}
}
