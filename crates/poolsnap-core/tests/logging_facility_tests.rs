#![allow(clippy::unwrap_used, clippy::expect_used)]

use poolsnap_core::diff::{compare_collections, find_unchanged, PoolFilter};
use poolsnap_core::errors::PoolSnapError;
use poolsnap_core::logging_facility::test_capture::init_test_capture;
use poolsnap_core::parser::{parse_snapshot_file, parse_snapshot_str};
use poolsnap_core::{log_op_end, log_op_error, log_op_start};
use poolsnap_core::catalog::{discover_snapshots, DEFAULT_PATTERN};
use poolsnap_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_LABEL_A, FIELD_LABEL_B, FIELD_PATH, FIELD_POOL_COUNT, FIELD_RESULT_POOLS,
    FIELD_SNAPSHOT_COUNT,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert_eq!(capture.find(op_name, EVENT_START).len(), 1);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PoolSnapError::SnapshotNotFound {
        label: "pool_snapshot_x.txt".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("NotFound"));
}

#[test]
fn test_parse_snapshot_file_logs_start_and_end() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pool_snapshot_logged.txt");
    fs::write(&path, "ltm pool p1 {\n    tot-conns 1\n}\n").unwrap();

    parse_snapshot_file(&path).unwrap();

    let shown = path.display().to_string();
    let started = capture.count_events(|e| {
        e.is("parse_snapshot_file", EVENT_START) && e.field(FIELD_PATH) == Some(shown.as_str())
    });
    assert_eq!(started, 1);

    let ended = capture.count_events(|e| {
        e.is("parse_snapshot_file", EVENT_END) && e.field(FIELD_POOL_COUNT) == Some("1")
    });
    assert!(ended >= 1);
}

#[test]
fn test_parse_failure_logs_io_error() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pool_snapshot_absent.txt");

    assert!(parse_snapshot_file(&path).is_err());

    let errors = capture.count_events(|e| {
        e.is("parse_snapshot_file", EVENT_END_ERROR) && e.field(FIELD_ERR_CODE) == Some("ERR_IO")
    });
    assert!(errors >= 1);
}

#[test]
fn test_comparisons_log_boundaries() {
    let capture = init_test_capture();
    let a = parse_snapshot_str("ltm pool p1 {\n    tot-conns 1\n}\n");
    let b = parse_snapshot_str("ltm pool p1 {\n    tot-conns 2\n}\n");

    compare_collections(&a, &b, "logged_a_unique", "logged_b_unique", None);
    find_unchanged(&a, &b, "logged_a_unique", "logged_b_unique", &PoolFilter::none(), None);

    for op in ["compare_collections", "find_unchanged"] {
        let starts = capture.count_events(|e| {
            e.is(op, EVENT_START)
                && e.field(FIELD_LABEL_A) == Some("logged_a_unique")
                && e.field(FIELD_LABEL_B) == Some("logged_b_unique")
        });
        assert_eq!(starts, 1, "expected one start event for {}", op);
        capture.assert_event_exists(op, EVENT_END);
    }

    // p1 differs on tot-conns and agrees on name
    let ends_with_one_pool = |op: &str| {
        capture.count_events(|e| e.is(op, EVENT_END) && e.field(FIELD_RESULT_POOLS) == Some("1"))
    };
    assert!(ends_with_one_pool("compare_collections") >= 1);
    assert!(ends_with_one_pool("find_unchanged") >= 1);
}

#[test]
fn test_discover_snapshots_logs_snapshot_count() {
    let capture = init_test_capture();
    let dir = TempDir::new().unwrap();
    for name in ["pool_snapshot_1.txt", "pool_snapshot_2.txt", "pool_snapshot_3.txt"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    discover_snapshots(dir.path(), DEFAULT_PATTERN).unwrap();

    let ended = capture.count_events(|e| {
        e.is("discover_snapshots", EVENT_END) && e.field(FIELD_SNAPSHOT_COUNT) == Some("3")
    });
    assert!(ended >= 1);
}
