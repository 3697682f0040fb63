//! Test utilities for ledger parser testing
//!
//! This module provides common fixtures and helper functions used across the
//! different test modules.

use crate::config::ImporterConfig;

use super::LedgerParser;

mod stats_tests;

/// Reference year pinned so year bounds do not depend on the clock
pub const TEST_REFERENCE_YEAR: i32 = 2025;

/// Parser with the built-in vocabulary and a pinned reference year
pub fn create_test_parser() -> LedgerParser {
    LedgerParser::new(&ImporterConfig::default().with_reference_year(TEST_REFERENCE_YEAR))
}

/// Turn string literals into a row of cells
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

/// A ledger as exported from the dealership spreadsheet, semicolon separated
pub fn create_test_ledger() -> String {
    r#"Controle de vendas - Janeiro
Data;Carro;Ano Modelo;Placa;Cliente;Gestauto;Valor Financiado;Retorno;Tipo;Comissão
16/01/2025;Honda Civic;2024;abc-1d23;Maria Souza;sim;R$ 45.000,00;R4;Venda;R$ 500,00
17/01/2025;Fiat Toro;2023/2024;BRA2E19;;não;;;Compra;0
;;;;;;;;;
18/01/2025;VW Gol;2015;;João;;;;;1.234,56
Total;;;;;;;;;1.734,56"#
        .to_string()
}

/// Two salespeople's ledgers laid side by side on the same rows
pub fn create_side_by_side_ledger() -> String {
    r#"data,carro,valor,,data,carro,valor
16/01/2025,Honda Civic,500,,20/01/2025,Toyota Corolla,700
17/01/2025,Fiat Uno,300,,,,
,,,,21/01/2025,Jeep Renegade,650"#
        .to_string()
}
