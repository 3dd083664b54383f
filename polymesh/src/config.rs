use anyhow::{Context, Result};
use polymesh_format::WriterConfig;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// Settings file of the `polymesh` command.
///
/// ```yaml
/// writer:
///   precision: 6
///   first_index: 1
/// ```
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Output options of the built-in formats
	#[serde(default)]
	pub writer: WriterConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	#[cfg(test)]
	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		let config =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))?;
		log::debug!("loaded {config:?} from {path:?}");
		Ok(config)
	}
}
