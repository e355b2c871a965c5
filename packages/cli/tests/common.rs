#![cfg(test)]
#![allow(dead_code)]

use std::{
	io::Write as _,
	path::Path,
	process::{Command, Output, Stdio},
};

const STAGEVER: &str = env!("CARGO_BIN_EXE_stagever");

#[macro_export]
macro_rules! assert_success {
	($output:expr) => {
		let output = &$output;
		assert!(
			output.status.success(),
			"expected success, stderr:\n{}",
			String::from_utf8_lossy(&output.stderr)
		);
	};
}

#[macro_export]
macro_rules! assert_failure {
	($output:expr) => {
		let output = &$output;
		assert!(
			!output.status.success(),
			"expected failure, stdout:\n{}",
			String::from_utf8_lossy(&output.stdout)
		);
	};
}

/// Build a command that reads its config from `directory`, which may not contain one.
pub fn command(directory: &Path, args: &[&str]) -> Command {
	let mut command = Command::new(STAGEVER);
	command
		.args(args)
		.env("STAGEVER_CONFIG", directory.join("config.json"))
		.env_remove("STAGEVER_TRACING")
		.stdin(Stdio::null());
	command
}

pub fn run(directory: &Path, args: &[&str]) -> Output {
	command(directory, args).output().unwrap()
}

pub fn run_with_stdin(directory: &Path, args: &[&str], stdin: &str) -> Output {
	let mut child = command(directory, args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();
	child
		.stdin
		.take()
		.unwrap()
		.write_all(stdin.as_bytes())
		.unwrap();
	child.wait_with_output().unwrap()
}

pub fn write_config(directory: &Path, config: &serde_json::Value) {
	let config = serde_json::to_vec_pretty(config).unwrap();
	std::fs::write(directory.join("config.json"), config).unwrap();
}

pub fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).unwrap()
}

pub fn stderr(output: &Output) -> String {
	String::from_utf8(output.stderr.clone()).unwrap()
}
