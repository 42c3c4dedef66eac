//! Integration tests for the Checker API

use dayspan::{
    Checker, DayspanError, Event,
    config::{AppConfig, ReportConfig},
    diagnostics::ErrorCode,
    find_overlaps,
};

#[test]
fn test_checker_without_overlaps() {
    let report = Checker::default()
        .check("2\n1 5\n6 10")
        .expect("valid input");

    assert_eq!(report.events().len(), 2);
    assert!(report.warnings().is_empty());
    assert!(report.is_clear());
    assert_eq!(report.to_string(), "");
}

#[test]
fn test_checker_reports_overlaps() {
    let report = Checker::default()
        .check("3\n1 10\n5 15\n20 25")
        .expect("valid input");

    let messages: Vec<String> = report.overlaps().iter().map(ToString::to_string).collect();
    assert_eq!(messages, ["Event 1 (1, 10) overlaps with Event 2 (5, 15)"]);
}

#[test]
fn test_checker_keeps_warnings() {
    let report = Checker::default().check("2\n10 5\n5 5").expect("valid input");

    assert_eq!(report.warnings().len(), 1);
    assert_eq!(report.warnings()[0].code(), Some(ErrorCode::W102));
    assert_eq!(
        report.to_string(),
        "Event 1 (5, 10) overlaps with Event 2 (5, 5)\n"
    );
}

#[test]
fn test_checker_rejects_errors() {
    let source = "2\n1 5\nx 7";
    let err = Checker::default().check(source).unwrap_err();

    match err {
        DayspanError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
            assert_eq!(
                err.diagnostics()[0].message(),
                "Line 3: \"x\" is not a valid integer for start day"
            );
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_checker_errors_come_before_warnings() {
    let err = Checker::default().check("-1\n9 3").unwrap_err();

    let DayspanError::Parse { err, .. } = err else {
        panic!("Expected parse error");
    };
    let severities: Vec<_> = err
        .diagnostics()
        .iter()
        .map(|diag| diag.severity().is_error())
        .collect();
    assert_eq!(severities, [true, false]);
}

#[test]
fn test_checker_deny_warnings() {
    let checker = Checker::new(AppConfig::new(ReportConfig::new(true, true)));

    assert!(checker.check("1\n1 2").is_ok());
    assert!(matches!(
        checker.check("1\n2 1"),
        Err(DayspanError::Parse { .. })
    ));
}

#[test]
fn test_parse_does_not_fail_on_errors() {
    let result = Checker::default().parse("2\n10 20");

    assert!(result.has_errors());
    assert_eq!(result.events().len(), 1);
}

#[test]
fn test_find_overlaps_on_constructed_events() {
    let events = [
        Event::new(10, 20).unwrap(),
        Event::new(15, 25).unwrap(),
    ];

    assert_eq!(find_overlaps(&events).len(), 1);
}
