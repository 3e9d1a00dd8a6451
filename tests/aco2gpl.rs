#![allow(non_snake_case)]

use {
	byteorder::{WriteBytesExt, BE},
	std::{
		io::Write,
		process::{Command, Output, Stdio},
	},
};

const HEADER: &str = "GIMP Palette\nName: Untitled\nColumns: 16\n#";

fn stream(words: &[u16]) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(words.len() * 2);
	for &word in words {
		bytes.write_u16::<BE>(word).unwrap();
	}
	bytes
}

fn run(program: &str, stdin: &[u8]) -> Output {
	let mut child = Command::new(program)
		.env_remove("RUST_LOG")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();
	child.stdin.take().unwrap().write_all(stdin).unwrap();
	child.wait_with_output().unwrap()
}

fn aco2gpl(stdin: &[u8]) -> Output {
	run(env!("CARGO_BIN_EXE_aco2gpl"), stdin)
}

fn text(bytes: &[u8]) -> &str {
	std::str::from_utf8(bytes).unwrap()
}

#[test]
fn zeroColorsGivesHeaderOnly() {
	let output = aco2gpl(&stream(&[1, 0]));
	assert_eq!(output.status.code(), Some(0));
	assert_eq!(text(&output.stdout), HEADER);
}

#[test]
fn version1ColorsKeepOrderAndSkipNonRgb() {
	let output = aco2gpl(&stream(&[
		1, 3, //
		0, 0xFF00, 0x7F80, 0x0001, 0, //
		1, 0, 0, 0, 0, // HSB
		0, 0x1000, 0x2000, 0x3000, 0,
	]));
	assert_eq!(output.status.code(), Some(0));
	assert_eq!(text(&output.stdout), format!("{HEADER}\n255 127 0 \n16 32 48 "));
	let stderr = text(&output.stderr);
	assert!(stderr.contains("reading ACO stream version: 1 (photoshop < 7.0)"), "{stderr}");
	assert!(stderr.contains("3 colors in this file"), "{stderr}");
	assert!(stderr.contains("Non RGB color (colorspace 1) skipped"), "{stderr}");
	assert!(stderr.contains("Generating GPL..."), "{stderr}");
	assert!(stderr.contains("Done."), "{stderr}");
}

#[test]
fn secondRecordSetWins() {
	let mut input = stream(&[1, 1, 0, 0x0100, 0x0200, 0x0300, 0]);
	input.extend(stream(&[
		2, 1, //
		0, 0x0100, 0x0200, 0x0300, 0, 0, 5, u16::from(b'S'), u16::from(b'k'), 0x4E2D, u16::from(b'y'), 0,
	]));
	let output = aco2gpl(&input);
	assert_eq!(output.status.code(), Some(0));
	assert_eq!(text(&output.stdout), format!("{HEADER}\n1 2 3 Sk y"));
}

#[test]
fn emptyInputReportsNoData() {
	let output = aco2gpl(&[]);
	assert_eq!(output.status.code(), Some(0));
	assert!(output.stdout.is_empty());
	assert!(text(&output.stderr).contains("No data!"));
}

#[test]
fn truncatedRecordExitsWithFailure() {
	let output = aco2gpl(&stream(&[1, 5, 0, 0x0100, 0x0200]));
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(text(&output.stderr).to_lowercase().contains("unexpected end of file"));
}

#[test]
fn unknownVersionExitsWithFailure() {
	let output = aco2gpl(&stream(&[7, 0]));
	assert_eq!(output.status.code(), Some(1));
	assert!(text(&output.stderr).contains("reading ACO stream version: Unknown ACO file version 7. Exiting..."));
}

#[test]
fn fatalSecondRecordSetLeavesStdoutEmpty() {
	let mut input = stream(&[1, 1, 0, 0x0100, 0x0200, 0x0300, 0]);
	input.extend(stream(&[2, 1, 0, 0x0100, 0x0200, 0x0300, 0, 0, 4, u16::from(b'a')]));
	let output = aco2gpl(&input);
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
	assert!(text(&output.stderr).contains("Unexpected end of file!"));
}

#[test]
fn unknownSecondVersionLeavesStdoutEmpty() {
	let output = aco2gpl(&stream(&[1, 1, 0, 0x0100, 0x0200, 0x0300, 0, 5]));
	assert_eq!(output.status.code(), Some(1));
	assert!(output.stdout.is_empty());
}

#[test]
fn tomlDumpListsEveryRecordSet() {
	let mut input = stream(&[1, 2, 0, 0x0100, 0x0200, 0x0300, 0, 8, 0, 0, 0, 0]);
	input.extend(stream(&[2, 1, 0, 0x0A00, 0x0B00, 0x0C00, 0, 0, 3, u16::from(b'o'), u16::from(b'k'), 0]));
	let output = run(env!("CARGO_BIN_EXE_aco_into_acoTOML"), &input);
	assert_eq!(output.status.code(), Some(0));

	let dump: toml::Value = toml::from_str(text(&output.stdout)).unwrap();
	let recordSets = dump["recordSet"].as_array().unwrap();
	assert_eq!(recordSets.len(), 2);
	assert_eq!(recordSets[0]["version"].as_integer(), Some(1));
	assert_eq!(recordSets[0]["declaredCount"].as_integer(), Some(2));
	let first = recordSets[0]["color"].as_array().unwrap();
	assert_eq!(first.len(), 1);
	assert_eq!(first[0]["g"].as_integer(), Some(2));
	assert!(first[0].get("name").is_none());
	assert_eq!(recordSets[1]["color"][0]["name"].as_str(), Some("ok"));
	assert_eq!(recordSets[1]["color"][0]["b"].as_integer(), Some(12));
}
