//! Integration tests for stager-cli: the happy paths, end to end.

use assert_cmd::Command;
use predicates::prelude::*;

fn stager() -> Command {
    let mut cmd = Command::cargo_bin("stager").unwrap();
    // Keep assertions independent of the developer's terminal setup.
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    stager()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stager"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    stager()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_person_command_help() {
    stager()
        .args(["person", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--first-name"))
        .stdout(predicate::str::contains("--last-name"))
        .stdout(predicate::str::contains("--birth-date"));
}

#[test]
fn test_person_build_success() {
    stager()
        .args(["person", "--first-name", "James", "--last-name", "Melvin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"first_name\": \"James\""))
        .stdout(predicate::str::contains("\"last_name\": \"Melvin\""))
        .stdout(predicate::str::contains("\"birth_date\": null"));
}

#[test]
fn test_person_build_with_birth_date() {
    stager()
        .args([
            "person",
            "--first-name",
            "James",
            "--last-name",
            "Melvin",
            "--birth-date",
            "1987-04-12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1987-04-12"));
}

#[test]
fn test_person_quiet_still_prints_the_value() {
    stager()
        .args([
            "-q", "person", "--first-name", "James", "--last-name", "Melvin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"first_name\": \"James\""))
        .stdout(predicate::str::contains("validated").not());
}

#[test]
fn test_user_build_success() {
    stager()
        .args([
            "user",
            "--user-name",
            "jmelvin",
            "--password",
            "hunter2",
            "--date-of-birth",
            "1990-01-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"user_name\": \"jmelvin\""))
        .stdout(predicate::str::contains("1990-01-31"));
}

#[test]
fn test_fields_person_table() {
    stager()
        .args(["fields", "person"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first_name (required)"))
        .stdout(predicate::str::contains("last_name (required)"))
        .stdout(predicate::str::contains("birth_date (optional)"));
}

#[test]
fn test_fields_user_list() {
    stager()
        .args(["fields", "user", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_name"))
        .stdout(predicate::str::contains("password"))
        .stdout(predicate::str::contains("date_of_birth"));
}

#[test]
fn test_fields_user_json() {
    stager()
        .args(["fields", "user", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"user_name\""))
        .stdout(predicate::str::contains("\"required\": true"));
}

#[test]
fn test_custom_date_format_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[defaults]\ndate_format = \"%d/%m/%Y\"\n").unwrap();

    stager()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "person",
            "--first-name",
            "James",
            "--last-name",
            "Melvin",
            "--birth-date",
            "12/04/1987",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1987-04-12"));
}

#[test]
fn test_shell_completions() {
    stager()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stager"));
}
