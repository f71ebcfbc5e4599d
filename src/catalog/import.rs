use std::io::Cursor;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use crate::catalog::codec;
use crate::errors::{AppError, AppResult};
use crate::models::{Catalog, REQUIRED_COLUMNS};

const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Parses an uploaded file into a replacement catalog.
///
/// Dispatch is by file name suffix: delimited text gets the two-step decode
/// and delimiter sniffing, spreadsheets go through calamine, and anything
/// else is rejected. The four identity columns must be a subset of the
/// parsed header or the import is aborted. The caller only persists on
/// `Ok`, so the existing catalog file is untouched on every failure path.
pub fn import_table(filename: &str, bytes: &[u8]) -> AppResult<Catalog> {
    let name = filename.to_lowercase();

    let (columns, records) = if name.ends_with(".csv") {
        let text = codec::decode_text(bytes);
        let delimiter = sniff_delimiter(&text);
        codec::read_table(&text, delimiter).map_err(|e| AppError::Import(e.to_string()))?
    } else if name.ends_with(".xlsx") || name.ends_with(".xls") {
        read_workbook(bytes)?
    } else {
        return Err(AppError::UnsupportedFormat(filename.to_string()));
    };

    validate_required_columns(&columns)?;

    Ok(Catalog::from_records(columns, records))
}

/// Picks the delimiter whose count in the header line is highest, defaulting
/// to the comma when nothing else wins.
pub fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    let mut best = b',';
    let mut best_count = header.matches(',').count();
    for candidate in DELIMITER_CANDIDATES {
        let count = header.matches(candidate as char).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

fn validate_required_columns(columns: &[String]) -> AppResult<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|required| required.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingRequiredColumns(missing))
    }
}

// First worksheet only; the first row is the header.
fn read_workbook(bytes: &[u8]) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| AppError::Import(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Import("el libro no contiene hojas".to_string()))?
        .map_err(|e| AppError::Import(e.to_string()))?;

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .ok_or_else(|| AppError::Import("la hoja está vacía".to_string()))?
        .iter()
        .map(cell_to_string)
        .collect();
    let records = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok((columns, records))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
