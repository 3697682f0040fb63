//! Core ledger parser implementation
//!
//! This module walks the grid of cells row by row, tracking the header
//! sections currently in force and coordinating the record parser, the stop
//! row detector and the header analyzer.

use std::sync::Arc;
use tracing::{debug, info, trace};

use super::field_aliases::FieldAliasTable;
use super::line_splitter::{build_grid, is_blank_row};
use super::record_parser::{RecordOutcome, ValidationRules, parse_sale_record};
use super::section::{Section, analyze_header_row};
use super::separator::Separator;
use super::stats::{DetectedHeader, ParseResult, ParseStats};
use super::stop_rows::StopRowDetector;
use crate::config::ImporterConfig;

/// Where the walk stands with respect to headers
#[derive(Debug)]
enum WalkState {
    NoHeaderSeen,
    HeaderActive(Vec<Section>),
}

/// Parser for free-text sales ledgers
///
/// Holds only immutable configuration; every call to [`LedgerParser::parse`]
/// builds its own grid and sections, so one parser can serve any number of
/// imports.
#[derive(Debug, Clone)]
pub struct LedgerParser {
    aliases: Arc<FieldAliasTable>,
    stop_rows: StopRowDetector,
    rules: ValidationRules,
}

impl LedgerParser {
    /// Create a parser from an importer configuration
    pub fn new(config: &ImporterConfig) -> Self {
        Self {
            aliases: FieldAliasTable::from_config(config),
            stop_rows: StopRowDetector::from_config(config),
            rules: ValidationRules::from_config(config),
        }
    }

    pub fn aliases(&self) -> &FieldAliasTable {
        &self.aliases
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Parse a whole ledger text into sales and row errors
    ///
    /// Never fails: malformed input yields skipped rows or entries in
    /// `errors`, and an empty text yields an empty result.
    pub fn parse(&self, text: &str) -> ParseResult {
        let separator = Separator::detect(text);
        let grid = build_grid(text, separator);
        info!(
            "Parsing ledger: {} lines, {} separated",
            grid.len(),
            separator
        );

        let mut stats = ParseStats::new();
        let mut sales = Vec::new();
        let mut errors = Vec::new();
        let mut headers = Vec::new();
        let mut state = WalkState::NoHeaderSeen;

        stats.total_rows = grid.len();

        for (index, row) in grid.iter().enumerate() {
            let row_number = index + 1;

            if is_blank_row(row) {
                stats.blank_rows += 1;
                continue;
            }

            let analysis = analyze_header_row(row, &self.aliases);
            if analysis.is_header() {
                debug!(
                    "Row {}: header with {} section(s)",
                    row_number,
                    analysis.sections.len()
                );
                stats.header_rows += 1;
                headers.push(DetectedHeader {
                    row: row_number,
                    sections: analysis.sections.clone(),
                });
                state = WalkState::HeaderActive(analysis.sections);
                continue;
            }

            let WalkState::HeaderActive(sections) = &state else {
                trace!("Row {}: no header yet, skipping", row_number);
                stats.rows_before_header += 1;
                continue;
            };

            if self.stop_rows.is_stop_row(row) {
                trace!("Row {}: summary row, skipping", row_number);
                stats.stop_rows += 1;
                continue;
            }

            stats.data_rows += 1;
            for section in sections {
                match parse_sale_record(row, section, row_number, &self.rules) {
                    RecordOutcome::Sale(sale) => {
                        stats.sales_parsed += 1;
                        sales.push(sale);
                    }
                    RecordOutcome::Rejected(error) => {
                        stats.records_rejected += 1;
                        errors.push(error);
                    }
                    RecordOutcome::Skipped(reason) => {
                        trace!("Row {}: section skipped ({:?})", row_number, reason);
                        stats.sections_skipped += 1;
                    }
                }
            }
        }

        info!(
            "Parsed {} sales with {} row errors from {} lines",
            stats.sales_parsed, stats.records_rejected, stats.total_rows
        );

        ParseResult {
            sales,
            errors,
            separator,
            headers,
            stats,
        }
    }
}

impl Default for LedgerParser {
    fn default() -> Self {
        Self::new(&ImporterConfig::default())
    }
}
