use {
	self::common::{run, stderr, stdout},
	pretty_assertions::assert_eq,
};

mod common;

#[test]
fn builtin_pairs() {
	let temp = tempfile::TempDir::new().unwrap();
	let output = run(temp.path(), &["check"]);
	assert_success!(output);
	let stdout = stdout(&output);
	assert_eq!(stdout.lines().count(), 6);
	assert!(stdout.lines().all(|line| line.starts_with("ok ")));
	assert!(stdout.contains(r#""1.0.0-rc.1" < "1.0.0""#));
}

#[test]
fn pairs_file() {
	let temp = tempfile::TempDir::new().unwrap();
	let path = temp.path().join("pairs.json");
	let pairs = serde_json::json!([
		["1.0.0-alpha", "1.0.0-beta"],
		["1.0.0", "1.0.0-rc.1"],
	]);
	std::fs::write(&path, serde_json::to_vec(&pairs).unwrap()).unwrap();
	let output = run(temp.path(), &["check", path.to_str().unwrap()]);
	assert_failure!(output);
	let stdout = stdout(&output);
	assert!(stdout.contains(r#"ok "1.0.0-alpha" < "1.0.0-beta""#));
	assert!(stdout.contains(r#"failed "1.0.0" < "1.0.0-rc.1""#));
	assert!(stderr(&output).contains("1 of 2 pairs are out of order"));
}

#[test]
fn non_string_operand() {
	let temp = tempfile::TempDir::new().unwrap();
	let path = temp.path().join("pairs.json");
	std::fs::write(&path, r#"[["1.0.0", 2]]"#).unwrap();
	let output = run(temp.path(), &["check", path.to_str().unwrap()]);
	assert_failure!(output);
	assert!(stderr(&output).contains("expected a version or a string, found a number"));
}

#[test]
fn missing_file() {
	let temp = tempfile::TempDir::new().unwrap();
	let path = temp.path().join("missing.json");
	let output = run(temp.path(), &["check", path.to_str().unwrap()]);
	assert_failure!(output);
	assert!(stderr(&output).contains("failed to read the pairs file"));
}
