use std::fs;
use std::process::Command;

use motlite::{
	Database,
	Lexicon,
	Word,
};

fn motlite() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_motlite"));
	cmd.env_remove("MOTLITE_SOURCE")
		.env_remove("MOTLITE_DATABASE")
		.env_remove("RUST_LOG");
	cmd
}

#[test]
fn convert_then_load() {
	let dir = tempfile::tempdir().unwrap();
	let txt = dir.path().join("ods6.txt");
	let json = dir.path().join("ods6.json");
	let database = dir.path().join("ods6.sqlite");
	fs::write(&txt, "chat\nchien\n\nsouris\n").unwrap();

	let status = motlite()
		.arg("convert")
		.arg("--input").arg(&txt)
		.arg("--output").arg(&json)
		.status()
		.expect("convert failed to run");
	assert!(status.success());

	let output = motlite()
		.arg("load")
		.arg("--source").arg(&json)
		.arg("--database").arg(&database)
		.output()
		.expect("load failed to run");
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("loaded 3 words"), "{stdout}");

	let db = Database::<Lexicon>::open(&database).unwrap();
	assert_eq!(db.count::<Word>().unwrap(), 3);
}

#[test]
fn defaults_come_from_environment() {
	let dir = tempfile::tempdir().unwrap();
	let json = dir.path().join("words.json");
	let database = dir.path().join("words.sqlite");
	fs::write(&json, r#"{"mots": ["chat"]}"#).unwrap();

	// no subcommand means `load`
	let status = motlite()
		.env("MOTLITE_SOURCE", &json)
		.env("MOTLITE_DATABASE", &database)
		.status()
		.expect("load failed to run");
	assert!(status.success());

	let db = Database::<Lexicon>::open(&database).unwrap();
	assert_eq!(db.count::<Word>().unwrap(), 1);
}

#[test]
fn failures_report_their_stage() {
	let dir = tempfile::tempdir().unwrap();
	let json = dir.path().join("ods6.json");
	let database = dir.path().join("ods6.sqlite");

	let cases = [
		(None, 3, "error (read)"),
		(Some("{"), 4, "error (parse)"),
		(Some(r#"{"words": []}"#), 5, "error (schema)"),
		(Some(r#"{"mots": ["chat", "chat"]}"#), 6, "error (store)"),
	];
	for (contents, code, message) in cases {
		match contents {
			Some(contents) => fs::write(&json, contents).unwrap(),
			None => { let _ = fs::remove_file(&json); }
		}
		let output = motlite()
			.arg("load")
			.arg("--source").arg(&json)
			.arg("--database").arg(&database)
			.output()
			.expect("load failed to run");
		assert_eq!(output.status.code(), Some(code), "{message}");
		let stderr = String::from_utf8_lossy(&output.stderr);
		assert!(stderr.contains(message), "{stderr}");
	}
}

#[test]
fn skip_duplicates_flag() {
	let dir = tempfile::tempdir().unwrap();
	let json = dir.path().join("ods6.json");
	let database = dir.path().join("ods6.sqlite");
	fs::write(&json, r#"{"mots": ["chat", "chat", "chien"]}"#).unwrap();

	let output = motlite()
		.arg("load")
		.arg("--source").arg(&json)
		.arg("--database").arg(&database)
		.arg("--skip-duplicates")
		.output()
		.expect("load failed to run");
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("1 duplicates skipped"), "{stdout}");
}

#[test]
fn load_flags_work_without_subcommand() {
	let dir = tempfile::tempdir().unwrap();
	let json = dir.path().join("ods6.json");
	let database = dir.path().join("ods6.sqlite");
	fs::write(&json, r#"{"mots": ["chat", "chat", "chien"]}"#).unwrap();

	let output = motlite()
		.arg("--source").arg(&json)
		.arg("--database").arg(&database)
		.arg("--skip-duplicates")
		.output()
		.expect("load failed to run");
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let db = Database::<Lexicon>::open(&database).unwrap();
	assert_eq!(db.count::<Word>().unwrap(), 2);
}

#[test]
fn usage_errors_are_not_stage_failures() {
	let output = motlite()
		.arg("--no-such-flag")
		.output()
		.expect("motlite failed to run");
	assert_eq!(output.status.code(), Some(2));
}

#[test]
fn json_summary() {
	let dir = tempfile::tempdir().unwrap();
	let json = dir.path().join("ods6.json");
	let database = dir.path().join("ods6.sqlite");
	fs::write(&json, r#"{"mots": ["chat", "chien", "chat"]}"#).unwrap();

	let output = motlite()
		.arg("load")
		.arg("--source").arg(&json)
		.arg("--database").arg(&database)
		.arg("--skip-duplicates")
		.arg("--json")
		.output()
		.expect("load failed to run");
	assert!(output.status.success());

	let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(summary["table"], "words_ods6");
	assert_eq!(summary["words_read"], 3);
	assert_eq!(summary["rows_inserted"], 2);
	assert_eq!(summary["duplicates_skipped"], 1);
}
