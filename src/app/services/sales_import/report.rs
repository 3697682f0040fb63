//! Import policy, outcome and report types

use serde::Serialize;
use std::fmt;

use crate::app::models::ImportError;
use crate::app::services::ledger_parser::{ParseResult, ParseStats, Separator};

/// High-level outcome handed to the import logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportOutcome {
    Success,
    Error,
}

impl ImportOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportOutcome::Success => "success",
            ImportOutcome::Error => "error",
        }
    }
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acceptance rules applied before anything reaches storage
///
/// Storage replaces every existing record, so the default refuses both an
/// empty import and one with rejected rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportPolicy {
    /// Allow replacing the store with zero records
    pub allow_empty: bool,

    /// Allow importing the valid rows when some rows were rejected
    pub allow_partial: bool,
}

impl ImportPolicy {
    /// Policy that accepts whatever the parser produced
    pub fn permissive() -> Self {
        Self {
            allow_empty: true,
            allow_partial: true,
        }
    }

    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn with_allow_partial(mut self, allow: bool) -> Self {
        self.allow_partial = allow;
        self
    }
}

/// Summary of a completed import or dry run
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    /// Label the source was logged under, usually the file name
    pub source_label: String,

    /// Delimiter the text was split with
    pub separator: Separator,

    /// Records handed to storage (zero for a dry run)
    pub imported: usize,

    /// Records that would be imported
    pub parsed: usize,

    /// True when storage was not touched
    pub dry_run: bool,

    /// Rows that looked like data but failed validation
    pub errors: Vec<ImportError>,

    /// Row classification counters
    pub stats: ParseStats,
}

impl ImportReport {
    pub(crate) fn from_parse(source_label: &str, result: ParseResult, dry_run: bool) -> Self {
        let parsed = result.sales.len();
        Self {
            source_label: source_label.to_string(),
            separator: result.separator,
            imported: if dry_run { 0 } else { parsed },
            parsed,
            dry_run,
            errors: result.errors,
            stats: result.stats,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
