use rstest::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use subprocess::{ExitStatus, Popen, PopenConfig, Redirection};
use tempfile::NamedTempFile;

struct RunResult {
	status: ExitStatus,
	stdout: String,
	stderr: String,
}

fn run_bsvwrap(args: &[&str]) -> RunResult {
	let mut argv = vec![env!("CARGO_BIN_EXE_bsvwrap")];
	argv.extend_from_slice(args);

	let mut p = Popen::create(
		&argv,
		PopenConfig {
			stdout: Redirection::Pipe,
			stderr: Redirection::Pipe,
			..Default::default()
		},
	)
	.expect("failed to spawn bsvwrap");

	let (stdout, stderr) = p.communicate(None).expect("failed to read bsvwrap output");
	let status = p.wait().unwrap();
	RunResult {
		status,
		stdout: stdout.unwrap_or_default(),
		stderr: stderr.unwrap_or_default(),
	}
}

/// Whitespace-separated flags stored next to the netlist
fn read_args(netlist: &Path) -> Vec<String> {
	std::fs::read_to_string(netlist.with_extension("args"))
		.expect("missing .args file")
		.split_whitespace()
		.map(String::from)
		.collect()
}

fn run_with_args(subcommand: &str, netlist: &Path, extra: &[&str]) -> RunResult {
	let flags = read_args(netlist);
	let mut args = vec![subcommand, netlist.to_str().unwrap()];
	args.extend(flags.iter().map(String::as_str));
	args.extend_from_slice(extra);
	run_bsvwrap(&args)
}

fn assert_success(result: &RunResult) {
	if !matches!(result.status, ExitStatus::Exited(0)) {
		eprintln!("bsvwrap failed: {:?}", result.status);
		eprintln!("{}", result.stderr);
		panic!("bsvwrap failed");
	}
}

#[rstest]
fn test_write_stdout(#[files("tests/input/*.json")] path: PathBuf) {
	let expected = std::fs::read_to_string(path.with_extension("bsv")).unwrap();
	let result = run_with_args("write", &path, &[]);
	assert_success(&result);
	assert_eq!(result.stdout, expected);
}

#[rstest]
fn test_write_file(#[files("tests/input/*.json")] path: PathBuf) {
	let expected = std::fs::read_to_string(path.with_extension("bsv")).unwrap();
	let out_file = NamedTempFile::new().unwrap();
	let result = run_with_args("write", &path, &[out_file.path().to_str().unwrap()]);
	assert_success(&result);
	assert!(result.stdout.is_empty());
	assert_eq!(std::fs::read_to_string(out_file.path()).unwrap(), expected);
}

#[rstest]
fn test_pass_matches_write(#[files("tests/input/*.json")] path: PathBuf) {
	let expected = std::fs::read_to_string(path.with_extension("bsv")).unwrap();
	let result = run_with_args("pass", &path, &[]);
	assert_success(&result);
	assert_eq!(result.stdout, expected);

	let out_file = NamedTempFile::new().unwrap();
	let result = run_with_args("pass", &path, &["-o", out_file.path().to_str().unwrap()]);
	assert_success(&result);
	assert!(result.stdout.is_empty());
	assert_eq!(std::fs::read_to_string(out_file.path()).unwrap(), expected);
}

#[rstest]
fn test_invalid_input(#[files("tests/input_invalid/*.json")] path: PathBuf) {
	for subcommand in ["write", "pass"] {
		let result = run_with_args(subcommand, &path, &[]);
		assert!(!matches!(result.status, ExitStatus::Exited(0)));
		assert!(result.stdout.is_empty());
		assert!(!result.stderr.is_empty());
	}
}

#[test]
fn test_pass_selection() {
	let path = Path::new("tests/input/fifo_pair.json");
	let result = run_with_args("pass", path, &["-s", "fifo_out"]);
	assert_success(&result);
	assert!(result.stdout.starts_with("(* always_ready, always_enabled *)\ninterface Deq;\n"));
	assert!(result.stdout.contains("import \"BVI\" fifo_out =\n"));
	assert!(!result.stdout.contains("fifo_in"));
	assert!(!result.stdout.contains("endmodule\n,\n"));

	// Selection order does not affect output order
	let both = run_with_args("pass", path, &["-s", "fifo_out", "-s", "fifo_in"]);
	assert_success(&both);
	assert_eq!(both.stdout, std::fs::read_to_string(path.with_extension("bsv")).unwrap());
}

#[test]
fn test_pass_unknown_module() {
	let result = run_with_args("pass", Path::new("tests/input/fifo_pair.json"), &["-s", "fifo_mid"]);
	assert!(matches!(result.status, ExitStatus::Exited(code) if code != 0));
	assert!(result.stdout.is_empty());
	assert!(result.stderr.contains("fifo_mid"));
}

#[test]
fn test_missing_output_directory() {
	let dir = tempfile::tempdir().unwrap();
	let target = dir.path().join("no_such_dir").join("out.bsv");
	let result = run_bsvwrap(&[
		"write",
		"tests/input/blinky.json",
		"-c",
		"clk",
		"-i",
		"Blinky",
		target.to_str().unwrap(),
	]);
	assert!(!matches!(result.status, ExitStatus::Exited(0)));
	assert!(result.stderr.contains("no_such_dir"));
	assert!(!target.exists());
}

#[test]
fn test_config_file_extended_by_flags() {
	let mut config = NamedTempFile::new().unwrap();
	write!(
		config,
		r#"{{ "clocks": ["clk"], "resets": ["rst"], "groups": ["foo"], "interface": "Top" }}"#
	)
	.unwrap();

	let result = run_bsvwrap(&[
		"write",
		"tests/input/scenario.json",
		"--config",
		config.path().to_str().unwrap(),
		"-g",
		"bar",
	]);
	assert_success(&result);
	assert_eq!(
		result.stdout,
		std::fs::read_to_string("tests/input/scenario.bsv").unwrap()
	);
}

#[test]
fn test_config_file_unknown_key() {
	let mut config = NamedTempFile::new().unwrap();
	write!(config, r#"{{ "interface": "Top", "clock": ["clk"] }}"#).unwrap();

	let result = run_bsvwrap(&[
		"write",
		"tests/input/scenario.json",
		"--config",
		config.path().to_str().unwrap(),
	]);
	assert!(!matches!(result.status, ExitStatus::Exited(0)));
	assert!(result.stdout.is_empty());
}
