//! Handing scanned requests to an executor.

use mount_chown::{annotations_from_json, apply_requests, parse_chown_requests};

use crate::test_utils::{capture_warnings, RecordingExecutor, CONFIG_ANNOTATIONS};

#[test]
fn executor_sees_each_valid_request_once() {
    let requests = parse_chown_requests(annotations_from_json(CONFIG_ANNOTATIONS).unwrap());
    let exec = RecordingExecutor::default();

    let summary = apply_requests(&requests, &exec);

    assert!(summary.all_applied());
    let calls = exec.calls.borrow();
    let mounts: Vec<&str> = calls.iter().map(|r| r.mount_point.as_str()).collect();
    assert_eq!(mounts, vec!["/var/cache/app", "/var/lib/data"]);
    assert!(!calls[0].is_recursive());
    assert!(calls[1].is_recursive());
}

#[test]
fn executor_failure_is_logged_and_counted() {
    let requests = parse_chown_requests(annotations_from_json(CONFIG_ANNOTATIONS).unwrap());
    let exec = RecordingExecutor {
        fail_on: vec!["/var/lib/data".to_string()],
        ..Default::default()
    };

    let (summary, logs) = capture_warnings(|| apply_requests(&requests, &exec));

    assert_eq!(summary.applied, vec!["/var/cache/app".to_string()]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "/var/lib/data");
    assert!(logs.contains("chown request failed"));
    assert!(logs.contains("operation not permitted"));
}
