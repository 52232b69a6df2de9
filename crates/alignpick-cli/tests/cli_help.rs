use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("alignpick")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pick"))
        .stdout(predicate::str::contains("moves"))
        .stdout(predicate::str::contains("cells"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_moves_help_shows_from_option() {
    cargo_bin_cmd!("alignpick")
        .args(["moves", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("DIRECTION"));
}

#[test]
fn test_pick_help_shows_options() {
    cargo_bin_cmd!("alignpick")
        .args(["pick", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--initial"))
        .stdout(predicate::str::contains("--save"))
        .stdout(predicate::str::contains("--no-mouse"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("alignpick")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
