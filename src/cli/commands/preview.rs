//! Preview command implementation

use super::shared::{
    load_configuration, print_json, print_row_errors, print_stats, setup_logging,
};
use crate::app::models::ParsedSale;
use crate::app::services::ledger_parser::{LedgerParser, ParseResult};
use crate::app::services::sales_import::read_ledger;
use crate::cli::args::{OutputFormat, PreviewArgs};
use anyhow::{Context, Result};
use colored::*;

/// Sales listed in text mode before the list is truncated
const MAX_SALES_SHOWN: usize = 10;

/// Run the preview command
pub async fn run_preview(args: PreviewArgs) -> Result<()> {
    setup_logging(&args)?;
    args.validate()?;

    let config = load_configuration(args.config_file.as_deref())?;
    let text = read_ledger(&args.file)
        .await
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let result = LedgerParser::new(&config).parse(&text);

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print_preview(&result),
    }

    Ok(())
}

fn print_preview(result: &ParseResult) {
    println!("\n{}", "Ledger Preview".bright_green().bold());
    println!(
        "  {} {}",
        "Separator:".bright_cyan(),
        result.separator.name().bright_white()
    );

    if result.headers.is_empty() {
        println!("  {}", "No header row recognized".bright_red());
    }
    for header in &result.headers {
        println!(
            "  {} {} section(s)",
            format!("Header at row {}:", header.row).bright_cyan(),
            header.sections.len()
        );
        for (index, section) in header.sections.iter().enumerate() {
            let columns: Vec<String> = section
                .mapped()
                .map(|(field, column)| format!("{}@{}", field, column + 1))
                .collect();
            println!("    {} {}", format!("[{}]", index + 1).dimmed(), columns.join(", "));
        }
    }

    print_stats(&result.stats);

    let verdict = readiness(result);
    if result.is_clean() {
        println!("  {}", verdict.bright_green().bold());
    } else {
        println!("  {}", verdict.bright_yellow().bold());
    }

    if !result.sales.is_empty() {
        println!("\n{}", "Sales".bright_green().bold());
        for sale in result.sales.iter().take(MAX_SALES_SHOWN) {
            println!(
                "  {}  {} ({})  {}  {:.2}{}",
                sale.sale_date_iso(),
                sale.carro.bright_white(),
                sale.ano_carro,
                sale.tipo_operacao,
                sale.valor_comissao,
                gestauto_marker(sale).bright_magenta()
            );
        }
        if result.sales.len() > MAX_SALES_SHOWN {
            println!(
                "  {}",
                format!("... and {} more", result.sales.len() - MAX_SALES_SHOWN).dimmed()
            );
        }
    }

    print_row_errors(&result.errors);
}

/// One-line verdict on whether the ledger can be imported as is
fn readiness(result: &ParseResult) -> &'static str {
    if result.is_clean() {
        "Ready to import"
    } else if result.sales.is_empty() {
        "Nothing to import"
    } else {
        "Needs review: some rows were rejected"
    }
}

fn gestauto_marker(sale: &ParsedSale) -> &'static str {
    if sale.gestauto.is_set() { "  [gestauto]" } else { "" }
}
