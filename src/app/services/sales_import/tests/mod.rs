//! Test utilities for import service testing
//!
//! In-memory and failing collaborators shared by the service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ImportLogger, ImportOutcome, ImportService, SalesStore};
use crate::app::models::ParsedSale;
use crate::app::services::ledger_parser::LedgerParser;
use crate::config::ImporterConfig;
use crate::{Error, Result};

mod json_store_tests;
mod report_tests;
mod service_tests;

pub const TEST_REFERENCE_YEAR: i32 = 2025;

/// Store keeping the last replaced record set in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub sales: Mutex<Vec<ParsedSale>>,
    pub replace_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with_sales(sales: Vec<ParsedSale>) -> Self {
        Self {
            sales: Mutex::new(sales),
            replace_calls: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self) -> Vec<ParsedSale> {
        self.sales.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.replace_calls.load(Ordering::SeqCst)
    }
}

impl SalesStore for MemoryStore {
    async fn replace_all(&self, sales: &[ParsedSale]) -> Result<()> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        *self.sales.lock().unwrap() = sales.to_vec();
        Ok(())
    }
}

/// Store rejecting every replace
#[derive(Debug, Default)]
pub struct FailingStore {
    pub replace_calls: AtomicUsize,
}

impl SalesStore for FailingStore {
    async fn replace_all(&self, _sales: &[ParsedSale]) -> Result<()> {
        self.replace_calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::storage("permission denied"))
    }
}

/// Logger remembering every recorded attempt
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub entries: Mutex<Vec<(String, usize, ImportOutcome)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(String, usize, ImportOutcome)> {
        self.entries.lock().unwrap().clone()
    }
}

impl ImportLogger for RecordingLogger {
    async fn record(
        &self,
        source_label: &str,
        record_count: usize,
        outcome: ImportOutcome,
    ) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .push((source_label.to_string(), record_count, outcome));
        Ok(())
    }
}

/// Logger whose backend is always unavailable
#[derive(Debug, Default)]
pub struct FailingLogger;

impl ImportLogger for FailingLogger {
    async fn record(
        &self,
        _source_label: &str,
        _record_count: usize,
        _outcome: ImportOutcome,
    ) -> Result<()> {
        Err(Error::storage("audit log unavailable"))
    }
}

pub fn create_test_parser() -> LedgerParser {
    LedgerParser::new(&ImporterConfig::default().with_reference_year(TEST_REFERENCE_YEAR))
}

pub fn create_test_service<S: SalesStore, L: ImportLogger>(
    store: S,
    logger: L,
) -> ImportService<S, L> {
    ImportService::new(create_test_parser(), store, logger)
}

/// Two valid sales
pub const CLEAN_LEDGER: &str = "data;carro;ano;comissão
16/01/2025;Honda Civic;2024;500,00
17/01/2025;Fiat Toro;2023;300,00";

/// One valid sale and one negative commission
pub const PARTIAL_LEDGER: &str = "data;carro;ano;comissão
16/01/2025;Honda Civic;2024;500,00
17/01/2025;Fiat Toro;2023;-50";
