// tests/integration/output_formats.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{LogDir, file_a, file_b};

fn log_tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_log_tally"))
}

#[test]
fn text_report_matches_expected_layout() {
    let dir = LogDir::new();
    let a = dir.write_log("a.log", &file_a());
    let b = dir.write_log("b.log", &file_b());

    let expected = "\
Number of Entries: 4
Log Severity Frequency:
   DEBUG: 0
   INFO: 1
   WARNING: 1
   ERROR: 2
Top Five Log Messages:
   1. Database error
   2. User logged in
   3. Low memory
Start Date/Time: 2024-01-01 23:00:00.000
End Date/Time: 2024-01-02 11:00:00.000
";

    log_tally().arg(&a).arg(&b).assert().success().stdout(expected);
}

#[test]
fn json_report_is_parseable() {
    let dir = LogDir::new();
    let a = dir.write_log("a.log", &file_a());
    let b = dir.write_log("b.log", &file_b());

    let output = log_tally().args(["--format", "json"]).arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("files").is_none());
    assert_eq!(value["global"]["entries"], 4);
    assert_eq!(value["global"]["severities"]["warning"], 1);
    assert_eq!(value["global"]["top_messages"][0]["message"], "Database error");
    assert_eq!(value["global"]["end"], "2024-01-02 11:00:00.000");
}

#[test]
fn json_per_file_keeps_argument_order() {
    let dir = LogDir::new();
    let b = dir.write_log("b.log", &file_b());
    let a = dir.write_log("a.log", &file_a());
    let gone = dir.missing("gone.log");

    let output = log_tally()
        .args(["--format", "json", "--per-file", "-j", "2"])
        .arg(&b)
        .arg(&gone)
        .arg(&a)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = value["files"].as_array().unwrap();
    let names: Vec<_> = files.iter().map(|f| f["path"].as_str().unwrap().to_owned()).collect();
    assert_eq!(names, [b.display().to_string(), gone.display().to_string(), a.display().to_string()]);
    assert!(files[1]["error"].is_string());
    assert_eq!(files[0]["entries"], 2);
}

#[test]
fn per_file_text_sections_precede_the_total() {
    let dir = LogDir::new();
    let a = dir.write_log("a.log", &file_a());

    log_tally()
        .arg("--per-file")
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("== {} ==", a.display())))
        .stdout(predicate::str::contains("== all files =="));
}
