//! Tests for the JSON file store

use tempfile::TempDir;

use super::*;
use crate::app::services::sales_import::JsonFileStore;

#[tokio::test]
async fn test_missing_store_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("sales.json"));

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_replace_round_trips_records() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("sales.json"));
    let sales = create_test_parser().parse(CLEAN_LEDGER).sales;

    store.replace_all(&sales).await.unwrap();

    assert!(store.path().exists());
    assert_eq!(store.load().await.unwrap(), sales);
}

#[tokio::test]
async fn test_second_replace_overwrites() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("sales.json"));
    let parser = create_test_parser();

    store.replace_all(&parser.parse(CLEAN_LEDGER).sales).await.unwrap();
    let second = parser.parse("data,carro\n01/02/2025,Jeep Compass").sales;
    store.replace_all(&second).await.unwrap();

    let stored = store.load().await.unwrap();
    assert_eq!(stored, second);

    // No temporary files left behind
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn test_stored_dates_are_iso_strings() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("sales.json"));

    store
        .replace_all(&create_test_parser().parse(CLEAN_LEDGER).sales)
        .await
        .unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["data_venda"], "2025-01-16");
    assert_eq!(json[0]["gestauto"], "Não");
    assert_eq!(json[1]["tipo_operacao"], "Venda");
}

#[tokio::test]
async fn test_corrupt_store_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.json");
    std::fs::write(&path, "not json").unwrap();

    let error = JsonFileStore::new(path).load().await.unwrap_err();
    assert!(matches!(error, Error::Serialization { .. }));
}
