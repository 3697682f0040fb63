//! Tests for the import workflow and its policy

use super::*;
use crate::app::services::sales_import::{ImportPolicy, read_ledger};

#[tokio::test]
async fn test_clean_import_replaces_store() {
    let service = create_test_service(MemoryStore::default(), RecordingLogger::default());

    let report = service.import_text("janeiro.csv", CLEAN_LEDGER).await.unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.parsed, 2);
    assert!(!report.dry_run);
    assert!(!report.has_errors());
    assert_eq!(service.store().calls(), 1);
    assert_eq!(service.store().snapshot()[1].carro, "Fiat Toro");
    assert_eq!(
        service.logger().entries(),
        vec![("janeiro.csv".to_string(), 2, ImportOutcome::Success)]
    );
}

#[tokio::test]
async fn test_import_replaces_previous_content() {
    let previous = create_test_parser().parse(PARTIAL_LEDGER).sales;
    let service = create_test_service(MemoryStore::with_sales(previous), RecordingLogger::default());

    service.import_text("fevereiro.csv", "data,carro\n01/02/2025,Jeep Compass").await.unwrap();

    let stored = service.store().snapshot();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].carro, "Jeep Compass");
}

#[tokio::test]
async fn test_partial_import_refused_by_default() {
    let service = create_test_service(MemoryStore::default(), RecordingLogger::default());

    let error = service.import_text("janeiro.csv", PARTIAL_LEDGER).await.unwrap_err();

    assert!(matches!(error, Error::PartialImport { error_count: 1, .. }));
    assert_eq!(service.store().calls(), 0);
    assert_eq!(
        service.logger().entries(),
        vec![("janeiro.csv".to_string(), 0, ImportOutcome::Error)]
    );
}

#[tokio::test]
async fn test_partial_import_allowed_by_policy() {
    let service = create_test_service(MemoryStore::default(), RecordingLogger::default())
        .with_policy(ImportPolicy::default().with_allow_partial(true));

    let report = service.import_text("janeiro.csv", PARTIAL_LEDGER).await.unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].row, 3);
    assert_eq!(service.store().snapshot().len(), 1);
}

#[tokio::test]
async fn test_empty_import_refused_unless_allowed() {
    let strict = create_test_service(MemoryStore::default(), RecordingLogger::default());
    let error = strict.import_text("vazio.csv", "nada aqui").await.unwrap_err();
    assert!(matches!(error, Error::EmptyImport { error_count: 0, .. }));
    assert_eq!(strict.store().calls(), 0);

    let permissive = create_test_service(MemoryStore::default(), RecordingLogger::default())
        .with_policy(ImportPolicy::permissive());
    let report = permissive.import_text("vazio.csv", "nada aqui").await.unwrap();
    assert_eq!(report.imported, 0);
    assert_eq!(permissive.store().calls(), 1);
}

#[tokio::test]
async fn test_failing_store_fails_import() {
    let service = create_test_service(FailingStore::default(), RecordingLogger::default());

    let error = service.import_text("janeiro.csv", CLEAN_LEDGER).await.unwrap_err();

    assert!(matches!(error, Error::Storage { .. }));
    assert_eq!(service.store().replace_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        service.logger().entries(),
        vec![("janeiro.csv".to_string(), 0, ImportOutcome::Error)]
    );
}

#[tokio::test]
async fn test_failing_logger_never_fails_import() {
    let service = create_test_service(MemoryStore::default(), FailingLogger);

    let report = service.import_text("janeiro.csv", CLEAN_LEDGER).await.unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(service.store().snapshot().len(), 2);
}

#[tokio::test]
async fn test_dry_run_touches_no_collaborator() {
    let service = create_test_service(MemoryStore::default(), RecordingLogger::default());

    let report = service.dry_run("janeiro.csv", CLEAN_LEDGER).unwrap();
    assert!(report.dry_run);
    assert_eq!(report.imported, 0);
    assert_eq!(report.parsed, 2);

    // Policy still applies
    assert!(service.dry_run("janeiro.csv", PARTIAL_LEDGER).is_err());

    assert_eq!(service.store().calls(), 0);
    assert!(service.logger().entries().is_empty());
}

#[tokio::test]
async fn test_preview_ignores_policy() {
    let service = create_test_service(MemoryStore::default(), RecordingLogger::default());

    let result = service.preview(PARTIAL_LEDGER);
    assert_eq!(result.sales.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(service.store().calls(), 0);
}

#[tokio::test]
async fn test_import_file_uses_file_name_and_strips_bom() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("março.csv");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(CLEAN_LEDGER.as_bytes());
    std::fs::write(&path, bytes).unwrap();

    let service = create_test_service(MemoryStore::default(), RecordingLogger::default());
    let report = service.import_file(&path).await.unwrap();

    assert_eq!(report.source_label, "março.csv");
    assert_eq!(report.imported, 2);
    assert_eq!(report.stats.header_rows, 1);
}

#[tokio::test]
async fn test_import_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = create_test_service(MemoryStore::default(), RecordingLogger::default());

    let error = service.import_file(&dir.path().join("missing.csv")).await.unwrap_err();

    assert!(matches!(error, Error::Io { .. }));
    assert!(service.logger().entries().is_empty());
}

#[tokio::test]
async fn test_read_ledger_replaces_invalid_utf8() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("latin1.csv");
    // "Comissão" encoded as latin-1
    std::fs::write(&path, b"data;carro;comiss\xe3o\n16/01/2025;Civic;10").unwrap();

    let text = read_ledger(&path).await.unwrap();
    assert!(text.starts_with("data;carro;comiss"));
    assert!(text.contains('\u{fffd}'));
}
