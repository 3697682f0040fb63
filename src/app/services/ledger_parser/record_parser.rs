//! Reading one section of one ledger row
//!
//! Each active section turns a row into exactly one outcome: a sale, a row
//! error, or a silent skip. Skips are ordinary results (comment lines,
//! half-filled rows, the unused half of a side-by-side layout), not errors.

use chrono::Datelike;
use tracing::{debug, trace};

use super::field_parsers::{
    extract_year, find_year_run, normalize_gestauto, normalize_operation, normalize_plate,
    parse_currency, parse_date,
};
use super::section::Section;
use crate::app::models::{ImportError, ParsedSale, RawFields, SaleField};
use crate::config::ImporterConfig;
use crate::constants::{DATE_ERROR_MIN_CAR_CHARS, MIN_VEHICLE_YEAR};

/// Validation settings shared by every row of one parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Latest accepted model year
    pub max_year: i32,

    /// Client name for rows that leave it blank
    pub client_placeholder: String,
}

impl ValidationRules {
    pub fn from_config(config: &ImporterConfig) -> Self {
        Self {
            max_year: config.current_year() + 1,
            client_placeholder: config.client_placeholder.clone(),
        }
    }
}

/// Why a section produced nothing for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Section lacks a date or car column
    IncompleteSection,
    /// Every cell of the section is blank
    NoContent,
    /// Date or car cell is blank
    MissingDateOrCar,
    /// Unreadable date next to car text too short to be a sale
    NoisyRow,
}

/// Result of reading one section of one row
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Sale(ParsedSale),
    Rejected(ImportError),
    Skipped(SkipReason),
}

/// Cell values of `row` for every column mapped by `section`
pub fn extract_fields(row: &[String], section: &Section) -> RawFields {
    section
        .mapped()
        .map(|(field, column)| {
            let value = row.get(column).map(|cell| cell.trim()).unwrap_or_default();
            (field, value.to_string())
        })
        .collect()
}

fn field<'a>(fields: &'a RawFields, field: SaleField) -> &'a str {
    fields.get(&field).map(String::as_str).unwrap_or_default()
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Read `row` through `section`
pub fn parse_sale_record(
    row: &[String],
    section: &Section,
    row_number: usize,
    rules: &ValidationRules,
) -> RecordOutcome {
    if !section.has_required_columns() {
        return RecordOutcome::Skipped(SkipReason::IncompleteSection);
    }

    let fields = extract_fields(row, section);
    if fields.values().all(|value| value.is_empty()) {
        return RecordOutcome::Skipped(SkipReason::NoContent);
    }

    let raw_date = field(&fields, SaleField::DataVenda);
    let carro = field(&fields, SaleField::Carro);
    if raw_date.is_empty() || carro.is_empty() {
        trace!("Row {}: date or car blank, skipping section", row_number);
        return RecordOutcome::Skipped(SkipReason::MissingDateOrCar);
    }

    let data_venda = parse_date(raw_date);
    let valor_comissao = parse_currency(field(&fields, SaleField::ValorComissao));
    let raw_year = field(&fields, SaleField::AnoCarro);

    let Some(data_venda) = data_venda else {
        // Policy heuristic: short car text next to a bad date is noise.
        if carro.chars().count() > DATE_ERROR_MIN_CAR_CHARS {
            debug!("Row {}: invalid date '{}'", row_number, raw_date);
            return RecordOutcome::Rejected(ImportError::new(
                row_number,
                format!("Invalid or missing sale date '{}'", raw_date),
                fields,
            ));
        }
        trace!("Row {}: unreadable date on noise row", row_number);
        return RecordOutcome::Skipped(SkipReason::NoisyRow);
    };

    let ano_carro = if raw_year.is_empty() {
        find_year_run(carro)
            .filter(|year| (MIN_VEHICLE_YEAR..=rules.max_year).contains(year))
            .unwrap_or_else(|| data_venda.year())
    } else {
        extract_year(raw_year)
    };

    if !(MIN_VEHICLE_YEAR..=rules.max_year).contains(&ano_carro) {
        debug!("Row {}: vehicle year {} out of range", row_number, ano_carro);
        return RecordOutcome::Rejected(ImportError::new(
            row_number,
            format!(
                "Invalid vehicle year '{}' (read as {}, expected {}-{})",
                raw_year, ano_carro, MIN_VEHICLE_YEAR, rules.max_year
            ),
            fields,
        ));
    }

    if valor_comissao < 0.0 {
        debug!("Row {}: negative commission {}", row_number, valor_comissao);
        return RecordOutcome::Rejected(ImportError::new(
            row_number,
            format!(
                "Invalid commission '{}': must not be negative",
                field(&fields, SaleField::ValorComissao)
            ),
            fields,
        ));
    }

    let raw_financed = field(&fields, SaleField::ValorFinanciado);
    let nome_cliente = field(&fields, SaleField::NomeCliente);

    RecordOutcome::Sale(ParsedSale {
        data_venda,
        carro: carro.to_string(),
        ano_carro,
        placa: normalize_plate(field(&fields, SaleField::Placa)),
        nome_cliente: if nome_cliente.is_empty() {
            rules.client_placeholder.clone()
        } else {
            nome_cliente.to_string()
        },
        gestauto: normalize_gestauto(field(&fields, SaleField::Gestauto)),
        valor_financiado: optional(raw_financed).map(|raw| parse_currency(&raw)),
        retorno: optional(field(&fields, SaleField::Retorno)),
        tipo_operacao: normalize_operation(field(&fields, SaleField::TipoOperacao)),
        valor_comissao,
    })
}
