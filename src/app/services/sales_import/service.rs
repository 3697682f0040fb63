//! Import service tying the parser to its collaborators

use std::path::Path;
use tracing::{debug, info, warn};

use super::collaborators::{ImportLogger, SalesStore};
use super::report::{ImportOutcome, ImportPolicy, ImportReport};
use crate::app::services::ledger_parser::{LedgerParser, ParseResult};
use crate::{Error, Result};

/// Runs the parser and hands accepted records to storage
///
/// Storage is a single replace-all call, so an import either lands
/// completely or leaves the store untouched.
#[derive(Debug)]
pub struct ImportService<S, L> {
    parser: LedgerParser,
    store: S,
    logger: L,
    policy: ImportPolicy,
}

impl<S: SalesStore, L: ImportLogger> ImportService<S, L> {
    pub fn new(parser: LedgerParser, store: S, logger: L) -> Self {
        Self {
            parser,
            store,
            logger,
            policy: ImportPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ImportPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn parser(&self) -> &LedgerParser {
        &self.parser
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn policy(&self) -> ImportPolicy {
        self.policy
    }

    /// Parse without applying the policy or touching any collaborator
    pub fn preview(&self, text: &str) -> ParseResult {
        self.parser.parse(text)
    }

    /// Parse and apply the policy, without storing or logging
    pub fn dry_run(&self, source_label: &str, text: &str) -> Result<ImportReport> {
        let result = self.parser.parse(text);
        self.check_policy(source_label, &result)?;
        Ok(ImportReport::from_parse(source_label, result, true))
    }

    /// Parse `text` and replace the store's content with the valid records
    pub async fn import_text(&self, source_label: &str, text: &str) -> Result<ImportReport> {
        let result = self.parser.parse(text);

        if let Err(refusal) = self.check_policy(source_label, &result) {
            self.log_outcome(source_label, 0, ImportOutcome::Error).await;
            return Err(refusal);
        }

        if let Err(e) = self.store.replace_all(&result.sales).await {
            warn!("Storage rejected import of '{}': {}", source_label, e);
            self.log_outcome(source_label, 0, ImportOutcome::Error).await;
            return Err(e);
        }

        let count = result.sales.len();
        self.log_outcome(source_label, count, ImportOutcome::Success)
            .await;
        info!(
            "Imported {} sales from '{}' ({} rows rejected)",
            count,
            source_label,
            result.errors.len()
        );

        Ok(ImportReport::from_parse(source_label, result, false))
    }

    /// Read a ledger file and import it under its file name
    pub async fn import_file(&self, path: &Path) -> Result<ImportReport> {
        let text = read_ledger(path).await?;
        self.import_text(&source_label(path), &text).await
    }

    /// Read a ledger file and dry-run it under its file name
    pub async fn dry_run_file(&self, path: &Path) -> Result<ImportReport> {
        let text = read_ledger(path).await?;
        self.dry_run(&source_label(path), &text)
    }

    fn check_policy(&self, source_label: &str, result: &ParseResult) -> Result<()> {
        if result.sales.is_empty() && !self.policy.allow_empty {
            debug!("Refusing empty import of '{}'", source_label);
            return Err(Error::empty_import(source_label, result.errors.len()));
        }
        if !result.errors.is_empty() && !self.policy.allow_partial {
            debug!(
                "Refusing partial import of '{}' ({} rows rejected)",
                source_label,
                result.errors.len()
            );
            return Err(Error::partial_import(source_label, result.errors.len()));
        }
        Ok(())
    }

    async fn log_outcome(&self, source_label: &str, count: usize, outcome: ImportOutcome) {
        if let Err(e) = self.logger.record(source_label, count, outcome).await {
            warn!("Failed to record import of '{}': {}", source_label, e);
        }
    }
}

/// Read a ledger as text
///
/// Bytes that are not UTF-8 are replaced rather than rejected, and the
/// byte-order mark spreadsheet exports put in front of the header is dropped.
pub async fn read_ledger(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read ledger {}", path.display()), e))?;

    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

/// Label a file import by its file name
pub fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
