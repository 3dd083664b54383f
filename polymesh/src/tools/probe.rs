use anyhow::{Context, Result};
use polymesh_core::BBox;
use polymesh_format::FormatRegistry;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// polygon or mesh file you want to probe
	#[arg(required = true)]
	filename: PathBuf,

	/// import the file as a triangle mesh
	#[arg(long, short)]
	mesh: bool,
}

pub fn run(arguments: &Subcommand, registry: &FormatRegistry) -> Result<()> {
	let path = &arguments.filename;
	let lines = if arguments.mesh {
		let format = registry.find_mesh_format(path)?;
		let mesh = format
			.import(path)
			.with_context(|| format!("failed to import mesh from {path:?}"))?;
		vec![
			format!("format: {}", format.name()),
			format!("vertices: {}", mesh.vertex_count()),
			format!("vertex attributes: {}", mesh.attribute_count()),
			format!("triangles: {}", mesh.triangle_count()),
			format!("triangle attributes: {}", mesh.triangle_attribute_count()),
			format!("segments: {}", mesh.segments.len()),
			format!("holes: {}", mesh.holes.len()),
			format!("regions: {}", mesh.regions.len()),
			format!("neighbors: {}", presence(mesh.neighbors.is_some())),
			format!("edges: {}", mesh.edges.as_ref().map_or(0, Vec::len)),
			format!("bbox: {}", bbox_text(mesh.bbox())),
		]
	} else {
		let format = registry.find_polygon_format(path)?;
		let polygon = format
			.read(path)
			.with_context(|| format!("failed to read polygon from {path:?}"))?;
		vec![
			format!("format: {}", format.name()),
			format!("vertices: {}", polygon.vertex_count()),
			format!("vertex attributes: {}", polygon.attribute_count()),
			format!("segments: {}", polygon.segment_count()),
			format!("holes: {}", polygon.holes.len()),
			format!("regions: {}", polygon.regions.len()),
			format!("bbox: {}", bbox_text(polygon.bbox())),
		]
	};

	println!("{}", lines.join("\n"));
	Ok(())
}

fn presence(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

fn bbox_text(bbox: Option<BBox>) -> String {
	bbox.map_or_else(|| "empty".to_string(), |b| b.to_string())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn probe_polygon() {
		run_command(vec!["polymesh", "probe", "-q", "../testdata/box.poly"]).unwrap();
	}

	#[test]
	fn probe_mesh() {
		run_command(vec!["polymesh", "probe", "--mesh", "../testdata/square.node"]).unwrap();
	}

	#[test]
	fn probe_unsupported() {
		assert!(run_command(vec!["polymesh", "probe", "../testdata/box.xyz"]).is_err());
	}
}
