mod test_utilities;
use predicates::str;
use rstest::rstest;
use test_utilities::*;

#[test]
fn command() {
	polymesh()
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: polymesh [OPTIONS] <COMMAND>"));
}

#[rstest]
#[case("convert", "[OPTIONS] <INPUT_FILE> <OUTPUT_FILE>")]
#[case("probe", "[OPTIONS] <FILENAME>")]
fn subcommand(#[case] sub_command: &str, #[case] usage: &str) {
	polymesh()
		.arg(sub_command)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains(format!("Usage: polymesh {sub_command} {usage}")));
}

#[test]
fn formats() {
	polymesh()
		.arg("formats")
		.assert()
		.success()
		.stdout(str::contains("triangle   polygon+mesh   *.node, *.poly, *.ele\n"))
		.stdout(str::contains("obj        mesh           *.obj\n"));
}
