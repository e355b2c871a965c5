use {
	self::common::{run, stderr, stdout, write_config},
	pretty_assertions::assert_eq,
};

mod common;

#[test]
fn symbols() {
	let temp = tempfile::TempDir::new().unwrap();
	let cases = [
		("1.0.0", "2.0.0", "<\n"),
		("1.0", "1.0.0", "=\n"),
		("1.0.0", "1.0.0-rc.1", ">\n"),
		("1.0.0-b1", "1.0.0-beta.1", "=\n"),
		("1.0.1b77.6", "1.0.10-alpha.beta", "<\n"),
	];
	for (left, right, expected) in cases {
		let output = run(temp.path(), &["compare", left, right]);
		assert_success!(output);
		assert_eq!(stdout(&output), expected);
	}
}

#[test]
fn numeric() {
	let temp = tempfile::TempDir::new().unwrap();
	let output = run(temp.path(), &["compare", "--numeric", "1.0.0-alpha", "1.0.0-beta"]);
	assert_success!(output);
	assert_eq!(stdout(&output), "-1\n");

	write_config(temp.path(), &serde_json::json!({ "numeric": true }));
	let output = run(temp.path(), &["cmp", "1.0.0", "1.0.0-rc"]);
	assert_success!(output);
	assert_eq!(stdout(&output), "1\n");
}

#[test]
fn malformed() {
	let temp = tempfile::TempDir::new().unwrap();
	let output = run(temp.path(), &["compare", "1.0.0", "1.0.0-xyz"]);
	assert_failure!(output);
	assert!(stderr(&output).contains(r#"unknown pre-release identifier "xyz""#));

	let output = run(temp.path(), &["compare", "latest", "1.0.0"]);
	assert_failure!(output);
	assert!(stderr(&output).contains("expected a leading number"));
}

#[test]
fn invalid_config() {
	let temp = tempfile::TempDir::new().unwrap();
	std::fs::write(temp.path().join("config.json"), "{").unwrap();
	let output = run(temp.path(), &["compare", "1.0.0", "2.0.0"]);
	assert_failure!(output);
	assert!(stderr(&output).contains("failed to deserialize the config"));
}

#[test]
fn tracing() {
	let temp = tempfile::TempDir::new().unwrap();
	write_config(
		temp.path(),
		&serde_json::json!({
			"tracing": {
				"filter": "stagever_version=trace",
				"format": "json",
			},
		}),
	);
	let output = run(temp.path(), &["compare", "1.0.0", "2.0.0"]);
	assert_success!(output);
	assert_eq!(stdout(&output), "<\n");
	assert!(stderr(&output).contains("parsed a version"));
}
