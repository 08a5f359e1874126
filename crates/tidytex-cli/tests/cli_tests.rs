use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn tidytex() -> Command {
    Command::cargo_bin("tidytex").unwrap()
}

#[test]
fn cleans_a_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", "a+b=c");

    tidytex()
        .arg(&input)
        .assert()
        .success()
        .stdout("a+b = c")
        .stderr("");
}

#[test]
fn joins_several_files_on_stdout() {
    let dir = TempDir::new().unwrap();
    let first = write_input(&dir, "first.tex", "a+b=c");
    let second = write_input(&dir, "second.tex", "x  y");

    tidytex()
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("a+b = c\nx y");
}

#[test]
fn in_place_rewrites_and_signals_the_change() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", "a+b=c\n");

    tidytex()
        .arg("-i")
        .arg(&input)
        .assert()
        .code(1)
        .stdout("");

    assert_eq!(fs::read_to_string(&input).unwrap(), "a+b = c\n");
}

#[test]
fn in_place_leaves_tidy_files_alone() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", "a+b = c\n");

    tidytex().arg("-i").arg(&input).assert().success();

    assert_eq!(fs::read_to_string(&input).unwrap(), "a+b = c\n");
}

#[test]
fn keep_flags_are_forwarded() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", "$a+b$ %keep\n");

    tidytex()
        .arg("-c")
        .arg("-d")
        .arg(&input)
        .assert()
        .success()
        .stdout("$a+b$ %keep\n");
}

#[test]
fn missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.tex");

    tidytex()
        .arg(&missing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn unpaired_math_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", "$a+b\n");

    tidytex()
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unpaired"));
}

#[test]
fn legacy_encodings_survive_an_in_place_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", b"caf\xe9 a+b=c\n".as_slice());

    tidytex()
        .arg("-e")
        .arg("latin1")
        .arg("-i")
        .arg(&input)
        .assert()
        .code(1);

    assert_eq!(fs::read(&input).unwrap(), b"caf\xe9 a+b = c\n");
}

#[test]
fn unknown_encoding_labels_are_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", "a+b=c\n");

    tidytex()
        .arg("-e")
        .arg("klingon")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown encoding"));
}

#[test]
fn undecodable_bytes_are_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.tex", b"\xff\xfe broken".as_slice());

    tidytex()
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn version_flag_names_the_tool() {
    tidytex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tidytex"));
}
