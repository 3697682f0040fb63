use clap::Parser;
use sales_ledger_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.get_command().is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // The store is replaced atomically, so an interrupted import leaves
        // the previous records in place
        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, stopping before the store is touched...");
                Err(anyhow::anyhow!("Import interrupted by user"))
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Sales Ledger Importer - Vehicle Sales Ledger Reader");
    println!("===================================================");
    println!();
    println!("Read sales ledgers pasted from spreadsheets (CSV, TSV, pipe or");
    println!("semicolon separated) and store them as validated sale records.");
    println!();
    println!("USAGE:");
    println!("    sales_ledger_importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Parse a ledger and replace the stored sales");
    println!("    preview     Show how a ledger would be read without storing anything");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Check how a ledger is read:");
    println!("    sales_ledger_importer preview vendas-janeiro.csv");
    println!();
    println!("    # Import, keeping valid rows when some rows are rejected:");
    println!("    sales_ledger_importer import vendas-janeiro.csv --store sales.json --allow-partial");
    println!();
    println!("    # Machine-readable dry run:");
    println!("    sales_ledger_importer import vendas.tsv --dry-run --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sales_ledger_importer <COMMAND> --help");
}
