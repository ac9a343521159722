//! Binary-level tests for vnname-split and vnname-unaccent.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

const DICTIONARY: &str = r#"{
  "family_names": ["Nguyễn", "Trần"],
  "compound_given_names": ["Thu Hà"]
}"#;

fn split_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vnname-split"));
    cmd.current_dir(dir).env_remove("VNNAME_NAMES").env_remove("RUST_LOG");
    cmd
}

fn unaccent_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vnname-unaccent"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn split_with_default_file_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vietnamese_names.txt"), "Trần Thị Thu Hà\n\nLê An\n").unwrap();
    fs::write(dir.path().join("common_names.json"), DICTIONARY).unwrap();

    split_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TSV saved to: names_parsed.tsv"))
        .stdout(predicate::str::contains("JSON saved to: names_parsed.json"))
        .stdout(predicate::str::contains("Log saved to: issues.log"));

    assert_eq!(
        fs::read_to_string(dir.path().join("names_parsed.tsv")).unwrap(),
        "Family\tMiddle\tGiven\nTrần\tThị\tThu Hà\nLê\t\tAn\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("issues.log")).unwrap(),
        "Line 2: Empty line\n"
    );
    let json = fs::read_to_string(dir.path().join("names_parsed.json")).unwrap();
    assert!(json.contains("\"line\": 3"));
    assert!(json.contains("\"given\": \"Thu Hà\""));
}

#[test]
fn split_with_explicit_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("in.txt"), "Nguyễn Văn An\nX Y Z\n").unwrap();
    fs::write(dir.path().join("dict.json"), DICTIONARY).unwrap();

    split_cmd(dir.path())
        .args([
            "--input", "in.txt", "--output", "out.tsv", "--json", "out.json", "--log", "out.log",
            "--names", "dict.json",
        ])
        .assert()
        .success();

    assert!(dir.path().join("out.tsv").exists());
    assert!(dir.path().join("out.json").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("out.log")).unwrap(),
        "Line 2: 'X Y Z' — Unrecognized family name: X\n"
    );
}

#[test]
fn names_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vietnamese_names.txt"), "Nguyễn Văn An\n").unwrap();
    fs::write(dir.path().join("env_names.json"), DICTIONARY).unwrap();

    split_cmd(dir.path())
        .env("VNNAME_NAMES", "env_names.json")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("issues.log")).unwrap(), "");
}

#[test]
fn split_missing_input_fails_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("common_names.json"), DICTIONARY).unwrap();

    split_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found: vietnamese_names.txt"));

    assert!(!dir.path().join("names_parsed.tsv").exists());
    assert!(!dir.path().join("names_parsed.json").exists());
    assert!(!dir.path().join("issues.log").exists());
}

#[test]
fn split_malformed_dictionary_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vietnamese_names.txt"), "Nguyễn Văn An\n").unwrap();
    fs::write(dir.path().join("common_names.json"), "{").unwrap();

    split_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed name dictionary"));

    assert!(!dir.path().join("names_parsed.tsv").exists());
}

#[test]
fn unaccent_with_default_file_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("names_parsed.tsv"),
        "Family\tMiddle\tGiven\nNguyễn\tVăn\tAn\n",
    )
    .unwrap();

    unaccent_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("names_western.tsv"));

    assert_eq!(
        fs::read_to_string(dir.path().join("names_western.tsv")).unwrap(),
        "Family\tMiddle\tGiven\nNguyen\tVan\tAn\n"
    );
}

#[test]
fn unaccent_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    unaccent_cmd(dir.path())
        .args(["--input", "absent.txt", "--output", "out.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found: absent.txt"));

    assert!(!dir.path().join("out.txt").exists());
}
