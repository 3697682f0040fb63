//! Data models for sales ledger imports
//!
//! This module contains the canonical field vocabulary, the validated sale
//! record produced by the importer and the row-level error reported for rows
//! that could not be interpreted.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Canonical Fields
// =============================================================================

/// Canonical fields a ledger column can be resolved to
///
/// The set is closed; the serialized names are the record field names used by
/// the storage collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleField {
    DataVenda,
    Carro,
    AnoCarro,
    Placa,
    NomeCliente,
    Gestauto,
    ValorFinanciado,
    Retorno,
    TipoOperacao,
    ValorComissao,
}

impl SaleField {
    /// Number of canonical fields
    pub const COUNT: usize = 10;

    /// All fields in declaration order
    pub const ALL: [SaleField; Self::COUNT] = [
        SaleField::DataVenda,
        SaleField::Carro,
        SaleField::AnoCarro,
        SaleField::Placa,
        SaleField::NomeCliente,
        SaleField::Gestauto,
        SaleField::ValorFinanciado,
        SaleField::Retorno,
        SaleField::TipoOperacao,
        SaleField::ValorComissao,
    ];

    /// Canonical snake_case name
    pub fn as_str(self) -> &'static str {
        match self {
            SaleField::DataVenda => "data_venda",
            SaleField::Carro => "carro",
            SaleField::AnoCarro => "ano_carro",
            SaleField::Placa => "placa",
            SaleField::NomeCliente => "nome_cliente",
            SaleField::Gestauto => "gestauto",
            SaleField::ValorFinanciado => "valor_financiado",
            SaleField::Retorno => "retorno",
            SaleField::TipoOperacao => "tipo_operacao",
            SaleField::ValorComissao => "valor_comissao",
        }
    }

    /// Position of this field in [`SaleField::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Fields a section must map at least one of to be usable
    pub fn is_anchor(self) -> bool {
        matches!(self, SaleField::DataVenda | SaleField::Carro)
    }
}

impl fmt::Display for SaleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        SaleField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| {
                Error::configuration(format!("Unknown sale field '{}'", s.trim()))
            })
    }
}

// =============================================================================
// Normalized Enumerations
// =============================================================================

/// Whether the dealership sold or bought the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperationType {
    #[default]
    Venda,
    Compra,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Venda => "Venda",
            OperationType::Compra => "Compra",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the sale went through the Gestauto program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GestautoFlag {
    Sim,
    #[default]
    #[serde(rename = "Não")]
    Nao,
}

impl GestautoFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            GestautoFlag::Sim => "Sim",
            GestautoFlag::Nao => "Não",
        }
    }

    pub fn is_set(self) -> bool {
        self == GestautoFlag::Sim
    }
}

impl fmt::Display for GestautoFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Import Records
// =============================================================================

/// Raw cell values of one row, keyed by the field their column resolved to
pub type RawFields = BTreeMap<SaleField, String>;

/// A validated sale record ready for the storage collaborator
///
/// `data_venda` serializes as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedSale {
    pub data_venda: NaiveDate,
    pub carro: String,
    pub ano_carro: i32,
    pub placa: Option<String>,
    pub nome_cliente: String,
    pub gestauto: GestautoFlag,
    pub valor_financiado: Option<f64>,
    pub retorno: Option<String>,
    pub tipo_operacao: OperationType,
    pub valor_comissao: f64,
}

impl ParsedSale {
    /// ISO rendering of the sale date
    pub fn sale_date_iso(&self) -> String {
        self.data_venda.format("%Y-%m-%d").to_string()
    }
}

/// A ledger row that looked like data but failed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportError {
    /// 1-based line number in the source text
    pub row: usize,

    /// Human-readable reason
    pub message: String,

    /// Raw cell values that failed
    pub data: RawFields,
}

impl ImportError {
    pub fn new(row: usize, message: impl Into<String>, data: RawFields) -> Self {
        Self {
            row,
            message: message.into(),
            data,
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.row, self.message)
    }
}
