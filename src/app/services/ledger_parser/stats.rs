//! Parsing statistics and result structures for ledger imports
//!
//! This module provides types for tracking how each row of a ledger was
//! classified and for handing the parsed records to the caller.

use serde::Serialize;

use super::section::Section;
use super::separator::Separator;
use crate::app::models::{ImportError, ParsedSale};

/// Parsing result with records, row errors and statistics
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// Validated sale records
    pub sales: Vec<ParsedSale>,

    /// Rows that looked like data but failed validation
    pub errors: Vec<ImportError>,

    /// Delimiter the text was split with
    pub separator: Separator,

    /// Every header row found, in order
    pub headers: Vec<DetectedHeader>,

    /// Row classification counters
    pub stats: ParseStats,
}

impl ParseResult {
    /// True when at least one record parsed and no row was rejected
    pub fn is_clean(&self) -> bool {
        !self.sales.is_empty() && self.errors.is_empty()
    }
}

/// A header row and the sections it defines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedHeader {
    /// 1-based line number
    pub row: usize,
    pub sections: Vec<Section>,
}

/// Row classification counters for one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines in the source text
    pub total_rows: usize,

    /// Rows with no content at all
    pub blank_rows: usize,

    /// Rows recognized as headers
    pub header_rows: usize,

    /// Rows skipped because no header had been seen yet
    pub rows_before_header: usize,

    /// Summary/footer rows skipped
    pub stop_rows: usize,

    /// Rows read as data under the active sections
    pub data_rows: usize,

    /// Sections that silently produced nothing for a data row
    pub sections_skipped: usize,

    /// Sale records produced
    pub sales_parsed: usize,

    /// Row errors produced
    pub records_rejected: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of examined records that became sales, as a percentage
    pub fn success_rate(&self) -> f64 {
        let examined = self.sales_parsed + self.records_rejected;
        if examined == 0 {
            0.0
        } else {
            (self.sales_parsed as f64 / examined as f64) * 100.0
        }
    }

    /// Check if no examined record was rejected
    pub fn is_successful(&self) -> bool {
        self.sales_parsed > 0 && self.records_rejected == 0
    }
}
