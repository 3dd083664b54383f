use anyhow::{Context, Result};
use polymesh_format::FormatRegistry;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// input file, e.g. *.poly, *.node, *.ele or *.obj
	#[arg()]
	input_file: PathBuf,

	/// output file; the format is chosen by its extension
	#[arg()]
	output_file: PathBuf,

	/// convert a triangle mesh instead of a polygon
	#[arg(long, short)]
	mesh: bool,
}

pub fn run(arguments: &Subcommand, registry: &FormatRegistry) -> Result<()> {
	eprintln!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	let input = &arguments.input_file;
	let output = &arguments.output_file;

	if arguments.mesh {
		let mesh = registry
			.import_mesh(input)
			.with_context(|| format!("failed to import mesh from {input:?}"))?;
		log::info!(
			"imported {} vertices and {} triangles",
			mesh.vertex_count(),
			mesh.triangle_count()
		);
		registry
			.write_mesh(&mesh, output)
			.with_context(|| format!("failed to write mesh to {output:?}"))?;
	} else {
		let polygon = registry
			.read_polygon(input)
			.with_context(|| format!("failed to read polygon from {input:?}"))?;
		log::info!(
			"read {} vertices and {} segments",
			polygon.vertex_count(),
			polygon.segment_count()
		);
		registry
			.write_polygon(&polygon, output)
			.with_context(|| format!("failed to write polygon to {output:?}"))?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use assert_fs::TempDir;
	use polymesh_core::MeshIoError;
	use polymesh_format::{FormatRegistry, MeshFormat, ObjFormat};

	#[test]
	fn polygon_to_poly() -> anyhow::Result<()> {
		let dir = TempDir::new()?;
		let output = dir.path().join("box.poly");
		run_command(vec![
			"polymesh",
			"convert",
			"-q",
			"../testdata/box.poly",
			output.to_str().unwrap(),
		])?;

		let registry = FormatRegistry::default();
		assert_eq!(
			registry.read_polygon(&output)?,
			registry.read_polygon("../testdata/box.poly".as_ref())?
		);
		Ok(())
	}

	#[test]
	fn mesh_to_obj() -> anyhow::Result<()> {
		let dir = TempDir::new()?;
		let output = dir.path().join("square.obj");
		run_command(vec![
			"polymesh",
			"convert",
			"--mesh",
			"../testdata/square.ele",
			output.to_str().unwrap(),
		])?;

		let mesh = ObjFormat::default().import(&output)?;
		assert_eq!(mesh.vertex_count(), 5);
		assert_eq!(mesh.triangle_count(), 4);
		Ok(())
	}

	#[test]
	fn unsupported_output() {
		let err = run_command(vec!["polymesh", "convert", "../testdata/box.poly", "box.xyz"]).unwrap_err();
		let source = err.downcast_ref::<MeshIoError>().unwrap();
		assert!(source.is_unsupported_format());
	}
}
