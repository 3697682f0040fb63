//! Splitting ledger lines into cells

use super::separator::Separator;

/// Rows of trimmed cells, one row per source line
pub type RawGrid = Vec<Vec<String>>;

/// Split every line of `text` with the given separator
pub fn build_grid(text: &str, separator: Separator) -> RawGrid {
    text.lines()
        .map(|line| split_line(line, separator))
        .collect()
}

/// Split one line into trimmed cells
///
/// Tab-separated lines are split directly. Other separators only delimit
/// outside double-quoted segments, and the surrounding quotes are dropped
/// from each cell. Always returns at least one cell.
pub fn split_line(line: &str, separator: Separator) -> Vec<String> {
    if separator == Separator::Tab {
        return line.split('\t').map(|cell| cell.trim().to_string()).collect();
    }

    let delimiter = separator.as_char();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == delimiter && !in_quotes {
            cells.push(finish_cell(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    cells.push(finish_cell(&current));

    cells
}

fn finish_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.trim().to_string()
}

/// True when every cell of the row is empty
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}
