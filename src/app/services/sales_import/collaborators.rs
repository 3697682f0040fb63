//! Collaborator boundaries of the import service
//!
//! Both collaborators are remote calls in production, hence async. Futures
//! are required to be `Send` so the service can run on a multi-threaded
//! runtime.

use std::future::Future;

use super::report::ImportOutcome;
use crate::Result;
use crate::app::models::ParsedSale;

/// Persistence for parsed sales
pub trait SalesStore: Send + Sync {
    /// Replace every stored record with `sales`
    ///
    /// Any failure fails the whole import; implementations must leave the
    /// previous content in place when they return an error.
    fn replace_all(&self, sales: &[ParsedSale]) -> impl Future<Output = Result<()>> + Send;
}

/// Audit trail of import attempts
pub trait ImportLogger: Send + Sync {
    /// Record one import attempt
    ///
    /// Errors are reported by the service and never abort an import.
    fn record(
        &self,
        source_label: &str,
        record_count: usize,
        outcome: ImportOutcome,
    ) -> impl Future<Output = Result<()>> + Send;
}
