//! Tests for parse statistics and result helpers

use super::super::stats::ParseStats;
use super::*;

#[test]
fn test_parse_stats_new() {
    let stats = ParseStats::new();
    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.sales_parsed, 0);
    assert_eq!(stats.records_rejected, 0);
    assert_eq!(stats.success_rate(), 0.0);
    assert!(!stats.is_successful());
}

#[test]
fn test_success_rate() {
    let stats = ParseStats {
        sales_parsed: 3,
        records_rejected: 1,
        ..ParseStats::default()
    };
    assert_eq!(stats.success_rate(), 75.0);
    assert!(!stats.is_successful());

    let clean = ParseStats {
        sales_parsed: 2,
        sections_skipped: 5,
        ..ParseStats::default()
    };
    // Skipped sections do not count against the rate
    assert_eq!(clean.success_rate(), 100.0);
    assert!(clean.is_successful());
}

#[test]
fn test_result_is_clean() {
    let parser = create_test_parser();

    assert!(parser.parse(&create_test_ledger()).is_clean());
    assert!(!parser.parse("").is_clean());

    let with_error = parser.parse("data,carro,ano\n16/01/2025,Honda Civic,1899");
    assert!(!with_error.is_clean());
    assert_eq!(with_error.stats.success_rate(), 0.0);
}

#[test]
fn test_result_serializes_for_reports() {
    let parser = create_test_parser();
    let result = parser.parse(&create_side_by_side_ledger());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["separator"], "comma");
    assert_eq!(json["stats"]["sales_parsed"], 4);
    assert_eq!(json["headers"][0]["row"], 1);
    assert_eq!(json["headers"][0]["sections"][1]["data_venda"], 4);
    assert_eq!(json["sales"][0]["data_venda"], "2025-01-16");
}
