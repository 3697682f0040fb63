//! Import logger writing to the tracing subscriber

use tracing::{info, warn};

use super::collaborators::ImportLogger;
use super::report::ImportOutcome;
use crate::Result;

/// Emits one structured event per import attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingImportLogger;

impl ImportLogger for TracingImportLogger {
    async fn record(
        &self,
        source_label: &str,
        record_count: usize,
        outcome: ImportOutcome,
    ) -> Result<()> {
        match outcome {
            ImportOutcome::Success => info!(
                source = source_label,
                records = record_count,
                outcome = %outcome,
                "Import recorded"
            ),
            ImportOutcome::Error => warn!(
                source = source_label,
                records = record_count,
                outcome = %outcome,
                "Import recorded"
            ),
        }
        Ok(())
    }
}
