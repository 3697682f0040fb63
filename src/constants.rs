//! Application constants for the sales ledger importer
//!
//! This module contains the built-in vocabularies, thresholds and default
//! values used throughout the importer.

use crate::app::models::SaleField;

// =============================================================================
// Separator Detection
// =============================================================================

/// Number of leading lines inspected when sniffing the delimiter
pub const SEPARATOR_SAMPLE_LINES: usize = 10;

// =============================================================================
// Header Vocabulary
// =============================================================================

/// Built-in header aliases per canonical field (lower-cased)
///
/// Resolution sorts every alias by length, longest first, so the order here
/// does not matter for precedence.
pub const DEFAULT_FIELD_ALIASES: &[(SaleField, &[&str])] = &[
    (
        SaleField::DataVenda,
        &[
            "data_venda",
            "data da venda",
            "data venda",
            "dt venda",
            "dt. venda",
            "sale date",
            "data",
            "date",
        ],
    ),
    (
        SaleField::Carro,
        &[
            "carro",
            "veiculo",
            "veículo",
            "automovel",
            "automóvel",
            "modelo",
            "vehicle",
        ],
    ),
    (
        SaleField::AnoCarro,
        &[
            "ano_carro",
            "ano carro",
            "ano do carro",
            "ano modelo",
            "ano/modelo",
            "ano fabricacao",
            "ano fabricação",
            "ano",
            "year",
        ],
    ),
    (SaleField::Placa, &["placa", "plate"]),
    (
        SaleField::NomeCliente,
        &[
            "nome_cliente",
            "nome do cliente",
            "nome cliente",
            "cliente",
            "comprador",
            "customer",
            "nome",
        ],
    ),
    (SaleField::Gestauto, &["gestauto", "gest auto", "gestão auto"]),
    (
        SaleField::ValorFinanciado,
        &[
            "valor_financiado",
            "valor financiado",
            "financiado",
            "financiamento",
        ],
    ),
    (SaleField::Retorno, &["retorno", "return"]),
    (
        SaleField::TipoOperacao,
        &[
            "tipo_operacao",
            "tipo de operação",
            "tipo de operacao",
            "tipo operação",
            "tipo operacao",
            "operação",
            "operacao",
            "tipo",
        ],
    ),
    (
        SaleField::ValorComissao,
        &[
            "valor_comissao",
            "valor comissão",
            "valor comissao",
            "comissão",
            "comissao",
            "commission",
            "valor",
        ],
    ),
];

// =============================================================================
// Summary / Footer Rows
// =============================================================================

/// Leading keywords of summary and footer rows (lower-cased prefixes)
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "total", "subtotal", "resumo", "saldo", "soma", "média", "media",
];

// =============================================================================
// Validation Bounds and Heuristics
// =============================================================================

/// Oldest accepted vehicle model year
pub const MIN_VEHICLE_YEAR: i32 = 1980;

/// Dates must fall strictly after this year to be accepted
pub const MIN_DATE_YEAR_EXCLUSIVE: i32 = 1980;

/// Dates must fall strictly before this year to be accepted
pub const MAX_DATE_YEAR_EXCLUSIVE: i32 = 2100;

/// A bad date is only reported when the car text is longer than this
///
/// Policy heuristic: shorter text is treated as noise, not as a sale.
pub const DATE_ERROR_MIN_CAR_CHARS: usize = 3;

/// Excel serial dates accepted as day counts (inclusive lower, exclusive upper)
pub const EXCEL_SERIAL_RANGE: std::ops::Range<i64> = 20_000..60_000;

/// Epoch of spreadsheet serial dates (year, month, day)
pub const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

// =============================================================================
// Normalization Vocabulary
// =============================================================================

/// Raw operation values (lower-cased) that mean a purchase
pub const PURCHASE_MARKERS: &[&str] = &["c", "x", "sim", "s"];

/// Substring that marks a purchase anywhere in the operation value
pub const PURCHASE_KEYWORD: &str = "compra";

/// Raw gestauto values (lower-cased) that mean the flag is set
pub const GESTAUTO_TRUE_VALUES: &[&str] = &["sim", "s", "yes", "true", "x", "ok", "com"];

/// Client name used when the ledger leaves it blank
pub const DEFAULT_CLIENT_PLACEHOLDER: &str = "Cliente não informado";

// =============================================================================
// CLI Defaults
// =============================================================================

/// Directory name used under the user config dir
pub const APP_CONFIG_DIR: &str = "sales-ledger-importer";

/// Configuration file name looked up under [`APP_CONFIG_DIR`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default JSON store written by the `import` command
pub const DEFAULT_STORE_FILE: &str = "sales.json";

/// Default log level for CLI output
pub const DEFAULT_LOG_LEVEL: &str = "warn";
