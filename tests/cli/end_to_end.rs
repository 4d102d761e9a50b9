use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE: &str = "import os  # std\n\n\"\"\"\nmodule notes\n\"\"\"\nprint(os.name)\n";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_code_counter"))
}

#[test]
fn stdin_to_text_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    bin()
        .arg("--output")
        .arg(&output)
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines of code: 2"))
        .stdout(predicate::str::contains("Total chars: 25"))
        .stdout(predicate::str::contains("print(os.name)"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "import os  \nprint(os.name)\n");
}

#[test]
fn file_input_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.py");
    fs::write(&input, SAMPLE).unwrap();

    let assert = bin().args(["--no-save", "--format", "json"]).arg(&input).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["cleaned"], serde_json::json!(["import os  ", "print(os.name)"]));
    assert_eq!(value["char_counts"], serde_json::json!([11, 14]));
    assert_eq!(value["statistics"]["max"], 14);
    assert!(value["persisted_to"].is_null());
}

#[test]
fn all_comments_exit_with_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    bin()
        .arg("--output")
        .arg(&output)
        .write_stdin("# one\n'''\ntwo\n'''\n")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("all lines were comments"));

    assert!(!output.exists());
}

#[test]
fn blank_input_exit_with_empty_input() {
    bin()
        .arg("--no-save")
        .write_stdin("\n   \n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing was entered"));
}

#[test]
fn unwritable_output_fails_without_printing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("output.txt");

    bin()
        .arg("--output")
        .arg(&output)
        .write_stdin("x = 1\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--no-save"))
        .stderr(predicate::str::contains("caused by:"));
}

#[test]
fn custom_syntax() {
    bin()
        .args(["--no-save", "--stats-only", "--show-counts", "--line-marker", ";", "--block-delimiter", "#|"])
        .write_stdin("(define x 1) ; note\n#|\nblock\n#|\n(display x)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Char counts: 13, 11"));
}
