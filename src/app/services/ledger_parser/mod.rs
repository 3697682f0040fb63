//! Tolerant parser for free-text sales ledgers
//!
//! Ledgers arrive as text pasted from spreadsheets or exported by hand: any of
//! four delimiters, headers spelled in Portuguese or English, several tables
//! laid side by side on the same rows, footer totals, and dates or amounts in
//! Brazilian or US notation. This module turns such text into validated
//! [`ParsedSale`](crate::app::models::ParsedSale) records plus one
//! [`ImportError`](crate::app::models::ImportError) per row it could not
//! trust. It never performs I/O.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`separator`] - Delimiter sniffing over the first lines
//! - [`line_splitter`] - Quote-aware splitting of one line into cells
//! - [`field_aliases`] - Header label to canonical field resolution
//! - [`section`] - Header row detection and side-by-side table partitioning
//! - [`stop_rows`] - Summary/footer row recognition
//! - [`field_parsers`] - Currency, date, year and flag normalizers
//! - [`record_parser`] - One section of one row into a sale or a row error
//! - [`parser`] - Grid walking orchestration
//! - [`stats`] - Parse counters and result structures
//!
//! ## Usage
//!
//! ```rust
//! use sales_ledger_importer::app::services::ledger_parser::LedgerParser;
//!
//! let parser = LedgerParser::default();
//! let result = parser.parse("data;carro;ano;comissão\n16/01/2025;Honda Civic;2024;500,00");
//!
//! assert_eq!(result.sales.len(), 1);
//! assert!(result.errors.is_empty());
//! ```

pub mod field_aliases;
pub mod field_parsers;
pub mod line_splitter;
pub mod parser;
pub mod record_parser;
pub mod section;
pub mod separator;
pub mod stats;
pub mod stop_rows;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use field_aliases::FieldAliasTable;
pub use parser::LedgerParser;
pub use section::{HeaderAnalysis, Section};
pub use separator::Separator;
pub use stats::{DetectedHeader, ParseResult, ParseStats};
