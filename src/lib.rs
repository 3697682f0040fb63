//! Sales Ledger Importer Library
//!
//! A Rust library for turning loosely-structured sales ledgers exported from
//! spreadsheets and chat messages into validated vehicle sale records.
//!
//! This library provides tools for:
//! - Sniffing the delimiter of CSV/TSV/pipe/semicolon text
//! - Resolving inconsistent headers to canonical fields through an alias table
//! - Detecting several side-by-side tables sharing the same rows
//! - Decoding Brazilian and US currency, dates, Excel serial dates and years
//! - Row-level validation with partial-failure reporting
//! - Handing the accepted records to a replace-all storage collaborator

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ledger_parser;
        pub mod sales_import;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{GestautoFlag, ImportError, OperationType, ParsedSale, SaleField};
pub use app::services::ledger_parser::{LedgerParser, ParseResult, ParseStats};
pub use config::ImporterConfig;

/// Result type alias for the sales ledger importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for operations around the parsing core
///
/// The parsing core itself never fails on malformed input; these errors come
/// from configuration, I/O and the storage boundary.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be decoded
    #[error("Configuration parsing error in '{file}': {source}")]
    ConfigParsing {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Record serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The storage collaborator rejected the replace-all call
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Nothing parsed and the policy forbids an empty replace
    #[error("No valid sales found in '{source_label}' ({error_count} row errors)")]
    EmptyImport {
        source_label: String,
        error_count: usize,
    },

    /// Rows were rejected and the policy forbids a partial import
    #[error("{error_count} rows of '{source_label}' were rejected; refusing partial import")]
    PartialImport {
        source_label: String,
        error_count: usize,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration parsing error
    pub fn config_parsing(file: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigParsing {
            file: file.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an empty import error
    pub fn empty_import(source_label: impl Into<String>, error_count: usize) -> Self {
        Self::EmptyImport {
            source_label: source_label.into(),
            error_count,
        }
    }

    /// Create a partial import error
    pub fn partial_import(source_label: impl Into<String>, error_count: usize) -> Self {
        Self::PartialImport {
            source_label: source_label.into(),
            error_count,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
