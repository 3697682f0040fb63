//! Shared components for CLI commands
//!
//! Logging setup, configuration loading and terminal rendering used by more
//! than one command.

use crate::app::models::ImportError;
use crate::app::services::ledger_parser::ParseStats;
use crate::cli::args::LoggingArgs;
use crate::config::ImporterConfig;
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Row errors printed in text mode before the list is truncated
pub const MAX_ERRORS_SHOWN: usize = 20;

/// Set up structured logging on stderr
pub fn setup_logging(args: &impl LoggingArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_ledger_importer={}", log_level)));

    if args.is_quiet() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the importer configuration for a command
pub fn load_configuration(config_file: Option<&Path>) -> Result<ImporterConfig> {
    if let Some(path) = config_file {
        info!("Using config file: {}", path.display());
    }

    let config = ImporterConfig::load(config_file).context("Failed to load importer configuration")?;
    debug!(
        "Configuration: {} extra alias groups, {} extra stop words, reference year {}",
        config.extra_aliases.len(),
        config.extra_stop_words.len(),
        config.current_year()
    );
    Ok(config)
}

/// Print any serializable report as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{}", rendered);
    Ok(())
}

/// Print the row classification counters
pub fn print_stats(stats: &ParseStats) {
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        stats.total_rows.to_string().bright_white()
    );
    println!(
        "  {} {} header, {} data, {} blank, {} totals, {} before header",
        "Rows:".bright_cyan(),
        stats.header_rows,
        stats.data_rows,
        stats.blank_rows,
        stats.stop_rows,
        stats.rows_before_header
    );
    println!(
        "  {} {}",
        "Sales parsed:".bright_cyan(),
        stats.sales_parsed.to_string().bright_white().bold()
    );
    if stats.records_rejected > 0 {
        println!(
            "  {} {}",
            "Rows rejected:".bright_red(),
            stats.records_rejected.to_string().bright_red().bold()
        );
        println!(
            "  {} {:.1}%",
            "Success rate:".bright_cyan(),
            stats.success_rate()
        );
    }
}

/// Print row errors, truncated after [`MAX_ERRORS_SHOWN`]
pub fn print_row_errors(errors: &[ImportError]) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "Rejected rows".bright_red().bold());
    for error in errors.iter().take(MAX_ERRORS_SHOWN) {
        println!("  {} {}", format!("Row {}:", error.row).yellow(), error.message);
    }
    if errors.len() > MAX_ERRORS_SHOWN {
        println!(
            "  {}",
            format!("... and {} more", errors.len() - MAX_ERRORS_SHOWN).dimmed()
        );
    }
}
