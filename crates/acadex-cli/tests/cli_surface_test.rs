//! Argument-parsing surface: the errors clap produces on its own.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn acadex() -> Command {
    Command::cargo_bin("acadex").unwrap()
}

#[test]
fn test_version_flag_prints_package_version() {
    acadex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("acadex "));
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    acadex()
        .arg("quizz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'quizz'"));
}

#[test]
fn test_invalid_format_value_lists_choices() {
    acadex()
        .args(["logout", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'yaml'"))
        .stderr(predicate::str::contains("possible values: plain, json"));
}
