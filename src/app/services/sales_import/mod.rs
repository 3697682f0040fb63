//! Import service for parsed sales ledgers
//!
//! This module sits between the parsing core and the outside world. It runs
//! the [`LedgerParser`](crate::LedgerParser), applies an [`ImportPolicy`],
//! replaces the content of a [`SalesStore`] and reports every attempt to an
//! [`ImportLogger`].
//!
//! # Architecture
//!
//! - [`collaborators`] - Storage and logging traits
//! - [`service`] - The import workflow
//! - [`report`] - Policy, outcome and report types
//! - [`json_store`] - Store writing a JSON array to disk
//! - [`logger`] - Logger emitting tracing events
//!
//! # Basic Usage
//!
//! ```rust
//! use sales_ledger_importer::LedgerParser;
//! use sales_ledger_importer::app::services::sales_import::{
//!     ImportPolicy, ImportService, JsonFileStore, TracingImportLogger,
//! };
//!
//! # async fn example() -> sales_ledger_importer::Result<()> {
//! let service = ImportService::new(
//!     LedgerParser::default(),
//!     JsonFileStore::new("sales.json"),
//!     TracingImportLogger,
//! )
//! .with_policy(ImportPolicy::default().with_allow_partial(true));
//!
//! let report = service
//!     .import_text("janeiro.csv", "data;carro\n16/01/2025;Honda Civic")
//!     .await?;
//! println!("Imported {} sales", report.imported);
//! # Ok(())
//! # }
//! ```

pub mod collaborators;
pub mod json_store;
pub mod logger;
pub mod report;
pub mod service;

#[cfg(test)]
pub mod tests;

pub use collaborators::{ImportLogger, SalesStore};
pub use json_store::JsonFileStore;
pub use logger::TracingImportLogger;
pub use report::{ImportOutcome, ImportPolicy, ImportReport};
pub use service::{ImportService, read_ledger, source_label};
