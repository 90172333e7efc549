// tests/integration/end_to_end.rs
use log_tally_domain::timestamp::format_timestamp;
use log_tally_infra::FsLogSource;
use log_tally_ports::NullProgress;
use log_tally_shared_kernel::{DomainError, EntryCount, Frequency, LogTallyError};
use log_tally_usecase::{AnalyzeLogs, DispatchOptionsBuilder};

use crate::common::{LogDir, file_a, file_b, log_line};

#[test]
fn two_files_reduce_to_one_global_summary() {
    let dir = LogDir::new();
    let paths = vec![dir.write_log("a.log", &file_a()), dir.write_log("b.log", &file_b())];

    let report = AnalyzeLogs::new(&FsLogSource, &NullProgress).run(&paths).unwrap();
    let global = &report.global;

    assert_eq!(global.entries, EntryCount::new(4));
    assert_eq!(global.severities.debug, Frequency::zero());
    assert_eq!(global.severities.info, Frequency::new(1));
    assert_eq!(global.severities.warning, Frequency::new(1));
    assert_eq!(global.severities.error, Frequency::new(2));

    let top = global.top_messages.first().unwrap();
    assert_eq!(top.message, "Database error");
    assert_eq!(top.frequency, Frequency::new(2));

    assert_eq!(format_timestamp(&global.start.unwrap()), "2024-01-01 23:00:00.000");
    assert_eq!(format_timestamp(&global.end.unwrap()), "2024-01-02 11:00:00.000");
}

#[test]
fn input_order_is_kept_in_the_report() {
    let dir = LogDir::new();
    let paths = vec![
        dir.write_log("z.log", &file_b()),
        dir.write_log("a.log", &file_a()),
        dir.write_log("m.log", ""),
    ];

    let report = AnalyzeLogs::new(&FsLogSource, &NullProgress).run(&paths).unwrap();
    let order: Vec<_> = report.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(order, paths);
    assert_eq!(report.files[2].summary.entries, EntryCount::new(0));
}

#[test]
fn bounded_and_unbounded_runs_agree() {
    let dir = LogDir::new();
    let paths: Vec<_> = (0..8)
        .map(|i| {
            let lines: Vec<_> = (0..=i)
                .map(|n| log_line(&format!("2024-03-0{} 12:00:0{n}.000", i % 9 + 1), "DEBUG", &format!("msg {n}")))
                .collect();
            dir.write_log(&format!("{i}.log"), &lines.join("\n"))
        })
        .collect();

    let unbounded = AnalyzeLogs::new(&FsLogSource, &NullProgress).run(&paths).unwrap();
    let single = DispatchOptionsBuilder::default().jobs(1usize).build().unwrap();
    let bounded = AnalyzeLogs::new(&FsLogSource, &NullProgress).with_options(single).run(&paths).unwrap();

    assert_eq!(unbounded, bounded);
    assert_eq!(unbounded.global.entries, EntryCount::new(36));
    assert_eq!(unbounded.global.severities.debug, Frequency::new(36));
}

#[test]
fn missing_file_is_skipped_not_fatal() {
    let dir = LogDir::new();
    let paths = vec![dir.write_log("a.log", &file_a()), dir.missing("nope.log")];

    let report = AnalyzeLogs::new(&FsLogSource, &NullProgress).run(&paths).unwrap();
    assert_eq!(report.global.entries, EntryCount::new(2));
    assert_eq!(report.unreadable().count(), 1);
}

#[test]
fn malformed_lines_only_lower_the_count() {
    let dir = LogDir::new();
    let text = [
        log_line("2024-01-02 10:00:00.000", "INFO", "kept"),
        "no pipes at all".to_string(),
        "2024-01-02 10:00:01.000 | INFO | m: f: notanumber - dropped".to_string(),
        "2024-01-02 10:00:02.000 | | m: f: 1 - no severity".to_string(),
        log_line("2024-01-02 10:00:03.000", "CRITICAL", "kept but not tallied"),
    ]
    .join("\n");
    let paths = vec![dir.write_log("mixed.log", &text)];

    let report = AnalyzeLogs::new(&FsLogSource, &NullProgress).run(&paths).unwrap();
    assert_eq!(report.global.entries, EntryCount::new(2));
    assert_eq!(report.global.severities.total(), Frequency::new(1));
}

#[test]
fn wrongly_shaped_bound_timestamp_is_fatal() {
    let dir = LogDir::new();
    let text = [log_line("yesterday", "INFO", "first"), log_line("2024-01-02 10:00:00.000", "INFO", "last")].join("\n");
    let paths = vec![dir.write_log("a.log", &file_a()), dir.write_log("bad.log", &text)];

    let err = AnalyzeLogs::new(&FsLogSource, &NullProgress).run(&paths).unwrap_err();
    let LogTallyError::Context { source, .. } = &err else {
        panic!("expected context, got {err:?}");
    };
    assert!(matches!(**source, LogTallyError::Domain(DomainError::TimestampFormat { .. })));
    assert!(err.to_string().contains("bad.log"));
}
