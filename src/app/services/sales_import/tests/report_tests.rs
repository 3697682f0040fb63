//! Tests for policy and report types

use super::*;
use crate::app::services::sales_import::{ImportPolicy, ImportReport, source_label};

#[test]
fn test_default_policy_is_strict() {
    let policy = ImportPolicy::default();
    assert!(!policy.allow_empty);
    assert!(!policy.allow_partial);

    let permissive = ImportPolicy::permissive();
    assert!(permissive.allow_empty && permissive.allow_partial);
    assert_eq!(
        ImportPolicy::default().with_allow_empty(true).with_allow_partial(true),
        permissive
    );
}

#[test]
fn test_outcome_rendering() {
    assert_eq!(ImportOutcome::Success.to_string(), "success");
    assert_eq!(
        serde_json::to_value(ImportOutcome::Error).unwrap(),
        serde_json::json!("error")
    );
}

#[test]
fn test_report_from_parse() {
    let result = create_test_parser().parse(PARTIAL_LEDGER);

    let report = ImportReport::from_parse("janeiro.csv", result.clone(), false);
    assert_eq!(report.imported, 1);
    assert_eq!(report.parsed, 1);
    assert!(report.has_errors());

    let dry = ImportReport::from_parse("janeiro.csv", result, true);
    assert_eq!(dry.imported, 0);
    assert_eq!(dry.parsed, 1);

    let json = serde_json::to_value(&dry).unwrap();
    assert_eq!(json["separator"], "semicolon");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["errors"][0]["row"], 3);
}

#[test]
fn test_source_label_uses_file_name() {
    assert_eq!(source_label(std::path::Path::new("/tmp/ledgers/jan.csv")), "jan.csv");
    assert_eq!(source_label(std::path::Path::new("/")), "/");
}
