//! Command implementations for the sales ledger importer CLI
//!
//! Each command is implemented in its own module; shared logging, config
//! loading and report printing live in [`shared`].

pub mod import;
pub mod preview;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler:
/// - `import`: Parse a ledger and replace the stored sales
/// - `preview`: Show how a ledger would be read
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Import(import_args)) => import::run_import(import_args).await,
        Some(Commands::Preview(preview_args)) => preview::run_preview(preview_args).await,
        None => anyhow::bail!("No command given; run with --help to list commands"),
    }
}
