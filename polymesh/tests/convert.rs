mod test_utilities;
use predicates::str;
use pretty_assertions::assert_eq;
use std::fs;
use test_utilities::*;

#[test]
fn convert_requires_input_and_output() {
	polymesh()
		.arg("convert")
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: polymesh convert"));
}

#[test]
fn convert_poly_to_poly() {
	let input = testdata("box.poly");
	let (temp_dir, output) = temp_output("box.poly");

	polymesh()
		.args(["convert", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty());

	let content = fs::read_to_string(&output).unwrap();
	assert!(content.starts_with("8 2 0 1\n0 0 0 1\n1 4 0 1\n"), "{content}");
	assert!(content.ends_with("1\n0 2 1\n1\n0 0.5 0.5 1 0.1\n"), "{content}");

	drop(temp_dir);
}

#[test]
fn convert_with_config() {
	let input = testdata("box.poly");
	let config = testdata("polymesh.yml");
	let (_temp_dir, output) = temp_output("box.poly");

	polymesh()
		.args([
			"convert",
			"--config",
			config.to_str().unwrap(),
			input.to_str().unwrap(),
			output.to_str().unwrap(),
		])
		.assert()
		.success();

	let content = fs::read_to_string(&output).unwrap();
	assert!(content.starts_with("8 2 0 1\n1 0.000 0.000 1\n2 4.000 0.000 1\n"), "{content}");
}

#[test]
fn convert_mesh_to_obj_and_back() {
	let input = testdata("square.ele");
	let (temp_dir, obj) = temp_output("square.obj");
	let node = temp_dir.path().join("square.node");

	polymesh()
		.args(["convert", "--mesh", input.to_str().unwrap(), obj.to_str().unwrap()])
		.assert()
		.success();
	assert_eq!(
		fs::read_to_string(&obj).unwrap(),
		"# 5 vertices, 4 triangles\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nv 0.5 0.5 0\n\
		 f 1 2 5\nf 2 3 5\nf 3 4 5\nf 4 1 5\n"
	);

	polymesh()
		.args(["convert", "--mesh", obj.to_str().unwrap(), node.to_str().unwrap()])
		.assert()
		.success();
	assert_eq!(
		fs::read_to_string(temp_dir.path().join("square.ele")).unwrap(),
		"4 3 0\n0 0 1 4\n1 1 2 4\n2 2 3 4\n3 3 0 4\n"
	);
	assert!(!temp_dir.path().join("square.neigh").exists());
}

#[test]
fn convert_to_unsupported_format() {
	let input = testdata("box.poly");
	let (_temp_dir, output) = temp_output("box.xyz");

	polymesh()
		.args(["convert", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("no polygon format supports"));
	assert!(!output.exists());
}

#[test]
fn convert_polygon_to_mesh_only_format() {
	let input = testdata("box.poly");
	let (_temp_dir, output) = temp_output("box.obj");

	polymesh()
		.args(["convert", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("no polygon format supports"));
}

#[test]
fn convert_reports_format_errors() {
	let (temp_dir, input) = temp_output("broken.poly");
	fs::write(&input, "3 2 0 0\n1 0 0\n2 1 0\n").unwrap();
	let output = temp_dir.path().join("out.poly");

	polymesh()
		.args(["convert", input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("failed to read polygon"))
		.stderr(str::contains("line 3: unexpected end of file, expected vertex"));
}
