// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Blyss contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn message_at_line() {
    let m = LintMessage::at_line("no-tabs", Severity::Error, 3, "Hard tab character.");
    assert_eq!(m.rule, "no-tabs");
    assert_eq!(m.line, Some(3));
    assert_eq!(m.severity, Severity::Error);
}

#[test]
fn message_whole_input() {
    let m = LintMessage::whole_input("final-newline", Severity::Warn, "Missing newline.");
    assert_eq!(m.line, None);
}

#[test]
fn report_counts_by_severity() {
    let report = LintReport::from_messages(vec![
        LintMessage::at_line("no-tabs", Severity::Error, 1, "x"),
        LintMessage::at_line("no-tabs", Severity::Error, 2, "x"),
        LintMessage::whole_input("final-newline", Severity::Warn, "x"),
    ]);
    assert_eq!(report.error_count, 2);
    assert_eq!(report.warning_count, 1);
    assert!(!report.is_clean());
}

#[test]
fn empty_report_is_clean() {
    let report = LintReport::from_messages(Vec::new());
    assert!(report.is_clean());
    assert_eq!(report.error_count, 0);
    assert_eq!(report.warning_count, 0);
}

#[test]
fn report_serializes_to_json() {
    let report = LintReport::from_messages(vec![LintMessage::at_line(
        "no-trailing-whitespace",
        Severity::Warn,
        7,
        "Trailing whitespace.",
    )]);

    let json = report.to_json();
    assert_eq!(json["warning_count"], 1);
    assert_eq!(json["messages"][0]["rule"], "no-trailing-whitespace");
    assert_eq!(json["messages"][0]["severity"], "warn");
    assert_eq!(json["messages"][0]["line"], 7);
}

#[test]
fn whole_input_line_is_omitted_from_json() {
    let m = LintMessage::whole_input("final-newline", Severity::Warn, "x");
    let json = serde_json::to_value(&m).unwrap();
    assert!(json.get("line").is_none());
}
