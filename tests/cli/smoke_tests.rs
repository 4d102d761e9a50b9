use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_code_counter"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("code_counter"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_code_counter"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_bad_delimiter() {
    Command::new(env!("CARGO_BIN_EXE_code_counter"))
        .args(["--no-save", "--block-delimiter", "*"])
        .write_stdin("x = 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two characters"));
}
