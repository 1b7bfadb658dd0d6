use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("palaver")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_exec_help_shows_options() {
    cargo_bin_cmd!("palaver")
        .args(["exec", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--title"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("palaver")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_chat_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("palaver")
        .env("PALAVER_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
