//! Scanning annotations decoded from a container spec.

use mount_chown::{annotations_from_json, Diagnostic, Owner, Policy, ScanOptions, Scanner};

use crate::test_utils::{capture_warnings, CONFIG_ANNOTATIONS};

#[test]
fn config_annotations_yield_complete_requests_only() {
    let annotations = annotations_from_json(CONFIG_ANNOTATIONS).unwrap();

    let (report, logs) = capture_warnings(|| Scanner::default().scan(&annotations));

    assert_eq!(report.requests.len(), 2);

    let data = &report.requests["/var/lib/data"];
    assert_eq!(data.name, "data");
    assert_eq!(data.owner, Owner::new(1000, 1000));
    assert_eq!(data.policy, Policy::Recursive);

    let cache = &report.requests["/var/cache/app"];
    assert_eq!(cache.owner, Owner::new(33, 0));
    assert_eq!(cache.policy, Policy::RootOnly);

    assert_eq!(
        report.diagnostics,
        vec![Diagnostic::MissingOwner {
            name: "logs".to_string()
        }]
    );
    assert!(logs.contains("empty owner argument value for logs"));
}

#[test]
fn requests_serialize_for_the_executor() {
    let annotations = annotations_from_json(CONFIG_ANNOTATIONS).unwrap();
    let report = Scanner::default().scan(&annotations);

    let json = serde_json::to_value(&report.requests).unwrap();
    assert_eq!(
        json["/var/cache/app"],
        serde_json::json!({
            "name": "cache",
            "mountPoint": "/var/cache/app",
            "user": 33,
            "group": 0,
            "policy": "root-only",
        })
    );
}

#[test]
fn scanning_twice_gives_the_same_report() {
    let annotations = annotations_from_json(CONFIG_ANNOTATIONS).unwrap();
    let scanner = Scanner::new(ScanOptions::default());
    assert_eq!(scanner.scan(&annotations), scanner.scan(&annotations));
}

#[test]
fn non_string_annotation_values_are_rejected_before_scanning() {
    let json = r#"{"com.launchplatform.oci-hooks.mount-chown.data.owner": 1000}"#;
    assert!(annotations_from_json(json).is_err());
}
