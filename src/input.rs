//! Transaction ingestion from CSV.
//!
//! Each data row is one transaction; the chosen column holds its items as a
//! single comma-separated string, e.g. `"bread,milk,eggs"`.

use crate::error::{FpError, FpResult};
use log::debug;
use std::io::Read;
use std::path::Path;

/// Default name of the column carrying the items.
pub const DEFAULT_ITEMS_COLUMN: &str = "Items";

/// Read every transaction from the CSV file at `path`.
pub fn read_transactions(path: &Path, column: &str) -> FpResult<Vec<Vec<String>>> {
    let file = std::fs::File::open(path)?;
    let transactions = read_transactions_from(file, column, path)?;
    debug!(
        "loaded {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

/// Read transactions from any CSV source. `source` only names the input in
/// error messages.
pub fn read_transactions_from<R: Read>(
    reader: R,
    column: &str,
    source: &Path,
) -> FpResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let column_index = reader
        .headers()?
        .iter()
        .position(|header| header.trim() == column)
        .ok_or_else(|| FpError::MissingColumn {
            column: column.to_string(),
            file: source.to_path_buf(),
        })?;

    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        transactions.push(parse_items(record.get(column_index).unwrap_or("")));
    }
    Ok(transactions)
}

/// Split a comma-separated item list, trimming tokens and dropping empty ones.
pub fn parse_items(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
