//! Command-line argument definitions for the sales ledger importer
//!
//! This module defines the complete CLI interface using clap derive API.

use crate::app::services::sales_import::ImportPolicy;
use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_STORE_FILE};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the sales ledger importer
///
/// Reads sales ledgers pasted from spreadsheets (CSV, TSV, pipe or semicolon
/// separated) and turns them into validated vehicle sale records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales_ledger_importer",
    version,
    about = "Import free-text vehicle sales ledgers into validated sale records",
    long_about = "A tolerant importer for sales ledgers exported from spreadsheets. Detects the \
                  delimiter, resolves Portuguese and English headers, reads several tables laid \
                  side by side, skips totals, and reports every row it could not trust before \
                  replacing the stored records."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a ledger and replace the stored sales with its records
    Import(ImportArgs),
    /// Show how a ledger would be read without storing anything
    Preview(PreviewArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Ledger file to import
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file holding the stored sales
    ///
    /// Its whole content is replaced by the imported records.
    #[arg(
        short = 's',
        long = "store",
        value_name = "PATH",
        default_value = DEFAULT_STORE_FILE,
        help = "JSON file whose content is replaced by the imported sales"
    )]
    pub store: PathBuf,

    /// Importer configuration file
    ///
    /// Extends the header aliases and stop words. If not specified, the
    /// config.json under the user config directory is used when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Importer configuration file (JSON)"
    )]
    pub config_file: Option<PathBuf>,

    /// Parse and check the ledger without writing the store
    #[arg(
        long = "dry-run",
        help = "Parse and apply the import policy without writing the store"
    )]
    pub dry_run: bool,

    /// Import the valid rows even when some rows were rejected
    #[arg(
        long = "allow-partial",
        help = "Import valid rows even when other rows were rejected"
    )]
    pub allow_partial: bool,

    /// Replace the store even when no sale was found
    #[arg(
        long = "allow-empty",
        help = "Replace the store even when the ledger has no valid sale"
    )]
    pub allow_empty: bool,

    /// Output format for the import summary
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the summary"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the preview command
#[derive(Debug, Clone, Parser)]
pub struct PreviewArgs {
    /// Ledger file to preview
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Importer configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Importer configuration file (JSON)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for the preview
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format for the preview"
    )]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored summary
    Text,
    /// JSON document for scripting
    Json,
}

/// Logging settings shared by every subcommand
pub trait LoggingArgs {
    fn get_log_level(&self) -> &'static str;

    fn is_quiet(&self) -> bool {
        false
    }
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn validate_ledger_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "Ledger file does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Ledger path is not a file: {}",
            path.display()
        )));
    }
    Ok(())
}

impl Args {
    /// Get the command to execute
    ///
    /// Callers check for a missing subcommand before dispatching.
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl ImportArgs {
    /// Validate arguments before any work is done
    pub fn validate(&self) -> Result<()> {
        validate_ledger_path(&self.file)?;

        if self.store.is_dir() {
            return Err(Error::configuration(format!(
                "Store path is a directory: {}",
                self.store.display()
            )));
        }

        Ok(())
    }

    /// Import policy selected by the flags
    pub fn policy(&self) -> ImportPolicy {
        ImportPolicy::default()
            .with_allow_empty(self.allow_empty)
            .with_allow_partial(self.allow_partial)
    }
}

impl LoggingArgs for ImportArgs {
    fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            level_for(self.verbose)
        }
    }

    fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl PreviewArgs {
    pub fn validate(&self) -> Result<()> {
        validate_ledger_path(&self.file)
    }
}

impl LoggingArgs for PreviewArgs {
    fn get_log_level(&self) -> &'static str {
        level_for(self.verbose)
    }
}
