use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{LogDir, file_a, log_line};

fn log_tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_log_tally"))
}

#[test]
fn shows_help() {
    log_tally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("log_tally"))
        .stdout(predicate::str::contains("--per-file"));
}

#[test]
fn shows_version() {
    log_tally()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_at_least_one_path() {
    log_tally().assert().code(2).stderr(predicate::str::contains("<PATHS>"));
}

#[test]
fn rejects_zero_jobs() {
    log_tally().args(["--jobs", "0", "a.log"]).assert().code(2).stderr(predicate::str::contains("at least 1"));
}

#[test]
fn unreadable_file_warns_but_succeeds() {
    let dir = LogDir::new();
    let a = dir.write_log("a.log", &file_a());
    let missing = dir.missing("missing.log");

    log_tally()
        .arg(&a)
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of Entries: 2"))
        .stderr(predicate::str::contains("could not read").and(predicate::str::contains("missing.log")));
}

#[test]
fn quiet_suppresses_warnings() {
    let dir = LogDir::new();
    let missing = dir.missing("missing.log");

    log_tally()
        .arg("-q")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of Entries: 0"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn bad_timestamp_exits_with_failure() {
    let dir = LogDir::new();
    let bad = dir.write_log("bad.log", &log_line("02/01/2024 10:00", "INFO", "oops"));

    log_tally()
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("log_tally: "))
        .stderr(predicate::str::contains("02/01/2024 10:00"));
}
