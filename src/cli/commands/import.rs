//! Import command implementation

use super::shared::{
    load_configuration, print_json, print_row_errors, print_stats, setup_logging,
};
use crate::app::services::ledger_parser::LedgerParser;
use crate::app::services::sales_import::{
    ImportReport, ImportService, JsonFileStore, TracingImportLogger,
};
use crate::cli::args::{ImportArgs, OutputFormat};
use anyhow::{Context, Result};
use colored::*;
use std::time::Instant;
use tracing::info;

/// Run the import command
pub async fn run_import(args: ImportArgs) -> Result<()> {
    setup_logging(&args)?;
    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;
    let service = ImportService::new(
        LedgerParser::new(&config),
        JsonFileStore::new(&args.store),
        TracingImportLogger,
    )
    .with_policy(args.policy());

    let start_time = Instant::now();
    let report = if args.dry_run {
        info!("Dry run of {}", args.file.display());
        service.dry_run_file(&args.file).await
    } else {
        service.import_file(&args.file).await
    }
    .with_context(|| format!("Import of {} failed", args.file.display()))?;

    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text if !args.quiet => {
            print_import_summary(&report, &args, start_time.elapsed().as_millis())
        }
        OutputFormat::Text => {}
    }

    Ok(())
}

fn print_import_summary(report: &ImportReport, args: &ImportArgs, elapsed_ms: u128) {
    let title = if report.dry_run {
        "Dry Run Summary"
    } else {
        "Import Summary"
    };
    println!("\n{}", title.bright_green().bold());
    println!(
        "  {} {}",
        "Source:".bright_cyan(),
        report.source_label.bright_white()
    );
    println!(
        "  {} {}",
        "Separator:".bright_cyan(),
        report.separator.name()
    );
    print_stats(&report.stats);

    if report.dry_run {
        println!(
            "  {} {} sales would replace {}",
            "Store:".bright_cyan(),
            report.parsed.to_string().bright_white().bold(),
            args.store.display()
        );
    } else {
        println!(
            "  {} {} sales written to {}",
            "Store:".bright_cyan(),
            report.imported.to_string().bright_white().bold(),
            args.store.display()
        );
    }
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed_ms.to_string().bright_white()
    );

    print_row_errors(&report.errors);
}
