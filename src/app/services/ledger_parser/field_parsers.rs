//! Field normalizers for ledger cells
//!
//! Pure functions decoding currency, dates, model years and flag columns as
//! they appear in Brazilian and US spreadsheets. None of them fail: an
//! undecodable value yields a neutral result the record parser validates.

use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::{GestautoFlag, OperationType};
use crate::constants::{
    EXCEL_EPOCH, EXCEL_SERIAL_RANGE, GESTAUTO_TRUE_VALUES, MAX_DATE_YEAR_EXCLUSIVE,
    MIN_DATE_YEAR_EXCLUSIVE, PURCHASE_KEYWORD, PURCHASE_MARKERS,
};

static FLOAT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)").expect("static regex must compile"));

static YEAR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}").expect("static regex must compile"));

static CURRENCY_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"R\$|US\$|[$€£¥]|\s").expect("static regex must compile"));

static PLATE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Z0-9-]").expect("static regex must compile"));

/// Date layouts tried in order after the Excel serial check
///
/// chrono's numeric specifiers accept unpadded values, so `dd/MM/yyyy` also
/// covers `d/M/yyyy`, and `%m/%d/%Y` covers both `M/d/yyyy` and `MM/dd/yyyy`.
/// Day-first always wins over month-first when both are valid.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y", // dd/MM/yyyy, d/M/yyyy
    "%d/%m/%y", // dd/MM/yy
    "%m/%d/%Y", // M/d/yyyy, MM/dd/yyyy
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

/// Parse an amount written with Brazilian or US grouping
///
/// Currency symbols and whitespace are dropped, then only the leading
/// numeric run is read, so annotations after the amount ("500 (2x)") are
/// ignored rather than merged into it. When both `.` and `,` occur in that
/// run, the rightmost one is the decimal separator. A lone `,` is a decimal
/// comma. Returns 0 for empty or unparseable input.
pub fn parse_currency(value: &str) -> f64 {
    let stripped = CURRENCY_NOISE.replace_all(value, "");
    let cleaned: String = stripped
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || matches!(c, '.' | ',') || (i == 0 && c == '-'))
        .map(|(_, c)| c)
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');

    let normalized = match (last_dot, last_comma) {
        // 1,234.56
        (Some(dot), Some(comma)) if dot > comma => cleaned.replace(',', ""),
        // 1.234,56
        (Some(_), Some(_)) => cleaned.replace('.', "").replace(',', "."),
        // 400,00
        (None, Some(_)) => cleaned.replace(',', "."),
        _ => cleaned,
    };

    parse_float_prefix(&normalized)
}

/// Leading float of `value`, 0 when there is none
fn parse_float_prefix(value: &str) -> f64 {
    FLOAT_PREFIX
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Parse a sale date
///
/// Tries an Excel serial day count first, then each layout of
/// [`DATE_FORMATS`]. Every candidate, serials included, is only accepted
/// when its year lies strictly between 1980 and 2100. Cells carrying a time
/// component ("2025-01-16 00:00:00") fall back to their leading date token.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let serial = parse_excel_serial(value).filter(|date| is_plausible_sale_year(date.year()));
    if let Some(date) = serial {
        return Some(date);
    }
    if let Some(date) = parse_with_formats(value) {
        return Some(date);
    }

    let token = value
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .unwrap_or(value);
    if token.len() < value.len() {
        return parse_with_formats(token);
    }

    None
}

/// Day count since 1899-12-30 for five-digit serials in the accepted range
pub fn parse_excel_serial(value: &str) -> Option<NaiveDate> {
    if value.len() != 5 || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let days: i64 = value.parse().ok()?;
    if !EXCEL_SERIAL_RANGE.contains(&days) {
        return None;
    }

    let (year, month, day) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)?.checked_add_signed(Duration::days(days))
}

fn parse_with_formats(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .filter(|date| is_plausible_sale_year(date.year()))
    })
}

fn is_plausible_sale_year(year: i32) -> bool {
    year > MIN_DATE_YEAR_EXCLUSIVE && year < MAX_DATE_YEAR_EXCLUSIVE
}

/// Extract a vehicle model year
///
/// Looks for a 19xx/20xx run anywhere, then the segment after the last `/`
/// ("2019/20" style), then the digits of the whole cell. Two-digit years are
/// read as 20xx. Returns 0 when nothing matches.
pub fn extract_year(value: &str) -> i32 {
    let value = value.trim();

    if let Some(year) = find_year_run(value) {
        return year;
    }

    if value.contains('/') {
        let tail = value.rsplit('/').next().unwrap_or_default().trim();
        return year_from_digits(tail);
    }

    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    year_from_digits(&digits)
}

/// First 19xx/20xx run in `value`
pub fn find_year_run(value: &str) -> Option<i32> {
    YEAR_RUN
        .find(value)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

fn year_from_digits(digits: &str) -> i32 {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return 0;
    }

    match digits.len() {
        4 => digits.parse().unwrap_or(0),
        2 => digits.parse::<i32>().map(|yy| 2000 + yy).unwrap_or(0),
        _ => 0,
    }
}

/// "Compra" when the raw value mentions a purchase or is a purchase marker
pub fn normalize_operation(value: &str) -> OperationType {
    let lowered = value.trim().to_lowercase();
    if lowered.contains(PURCHASE_KEYWORD) || PURCHASE_MARKERS.contains(&lowered.as_str()) {
        OperationType::Compra
    } else {
        OperationType::Venda
    }
}

/// "Sim" for the affirmative spellings ledgers use, "Não" otherwise
pub fn normalize_gestauto(value: &str) -> GestautoFlag {
    let lowered = value.trim().to_lowercase();
    if GESTAUTO_TRUE_VALUES.contains(&lowered.as_str()) {
        GestautoFlag::Sim
    } else {
        GestautoFlag::Nao
    }
}

/// Uppercase plate reduced to `[A-Z0-9-]`; None when nothing is left
pub fn normalize_plate(value: &str) -> Option<String> {
    let upper = value.trim().to_uppercase();
    let plate = PLATE_NOISE.replace_all(&upper, "");
    if plate.is_empty() {
        None
    } else {
        Some(plate.into_owned())
    }
}
