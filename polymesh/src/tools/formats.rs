use anyhow::Result;
use polymesh_format::{FileFormat, FormatRegistry};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {}

pub fn run(_arguments: &Subcommand, registry: &FormatRegistry) -> Result<()> {
	for format in registry.formats() {
		println!("{}", describe(format));
	}
	Ok(())
}

/// One line per format, in scan order: name, capabilities and extensions.
fn describe(format: &dyn FileFormat) -> String {
	let mut capabilities = Vec::new();
	if format.as_polygon_format().is_some() {
		capabilities.push("polygon");
	}
	if format.as_mesh_format().is_some() {
		capabilities.push("mesh");
	}
	let extensions = format
		.extensions()
		.iter()
		.map(|e| format!("*.{e}"))
		.collect::<Vec<_>>()
		.join(", ");
	format!("{:<10} {:<14} {extensions}", format.name(), capabilities.join("+"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use pretty_assertions::assert_eq;

	#[test]
	fn describes_built_in_formats() {
		let registry = FormatRegistry::default();
		let lines = registry.formats().map(describe).collect::<Vec<_>>();
		assert_eq!(
			lines,
			vec![
				"triangle   polygon+mesh   *.node, *.poly, *.ele",
				"obj        mesh           *.obj",
			]
		);
	}

	#[test]
	fn run_formats() {
		run_command(vec!["polymesh", "formats"]).unwrap();
	}
}
