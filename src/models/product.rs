use std::collections::HashMap;
use serde::{Deserialize, Serialize};

// Column names as they appear in the persisted file and in uploads
pub const COL_ID: &str = "ID";
pub const COL_NOMBRE: &str = "Nombre";
pub const COL_CATEGORIA: &str = "Categoría";
pub const COL_SUBCATEGORIA: &str = "Subcategoría";
pub const COL_PRECIO: &str = "Precio";
pub const COL_STOCK: &str = "Stock";

/// Identity columns an imported file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [COL_ID, COL_NOMBRE, COL_CATEGORIA, COL_SUBCATEGORIA];

/// Header synthesized when no catalog file exists yet.
pub const CANONICAL_COLUMNS: [&str; 6] = [
    COL_ID, COL_NOMBRE, COL_CATEGORIA, COL_SUBCATEGORIA, COL_PRECIO, COL_STOCK,
];

/// One product: a typed core plus an open mapping of any additional columns
/// the source file carried. Extras are round-tripped verbatim, never
/// interpreted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub nombre: String,
    pub categoria: String,
    pub subcategoria: String,
    pub precio: f64,
    pub stock: u32,
    pub extras: HashMap<String, String>,
}

/// The full in-memory mirror of the persisted table. `columns` preserves the
/// source header order so the file round-trips column-for-column.
///
/// IDs are not required to be unique: lookups take the first match and edits
/// apply to every match. That permissiveness is part of the data model.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Catalog {
    pub columns: Vec<String>,
    pub rows: Vec<ProductRow>,
}

impl ProductRow {
    /// String form of the given column, as rendered in the table and written
    /// back to disk.
    pub fn field(&self, column: &str) -> String {
        match column {
            COL_ID => self.id.clone(),
            COL_NOMBRE => self.nombre.clone(),
            COL_CATEGORIA => self.categoria.clone(),
            COL_SUBCATEGORIA => self.subcategoria.clone(),
            COL_PRECIO => format_precio(self.precio),
            COL_STOCK => self.stock.to_string(),
            extra => self.extras.get(extra).cloned().unwrap_or_default(),
        }
    }
}

impl Catalog {
    /// Empty catalog with the canonical header.
    pub fn empty() -> Self {
        Catalog {
            columns: CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Builds a catalog from a parsed header and raw string records.
    ///
    /// Normalization happens here, unconditionally: a header missing Precio
    /// or Stock gets the column appended, and every row missing (or carrying
    /// an unreadable) value in those columns gets 0.
    pub fn from_records(mut columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        for defaulted in [COL_PRECIO, COL_STOCK] {
            if !columns.iter().any(|c| c == defaulted) {
                columns.push(defaulted.to_string());
            }
        }

        let rows = records
            .into_iter()
            .map(|record| {
                let extras = columns
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| !CANONICAL_COLUMNS.contains(&c.as_str()))
                    .map(|(i, c)| {
                        (c.clone(), record.get(i).cloned().unwrap_or_default())
                    })
                    .collect();
                ProductRow {
                    id: cell(&columns, &record, COL_ID).to_string(),
                    nombre: cell(&columns, &record, COL_NOMBRE).to_string(),
                    categoria: cell(&columns, &record, COL_CATEGORIA).to_string(),
                    subcategoria: cell(&columns, &record, COL_SUBCATEGORIA).to_string(),
                    precio: parse_precio(cell(&columns, &record, COL_PRECIO)),
                    stock: parse_stock(cell(&columns, &record, COL_STOCK)),
                    extras,
                }
            })
            .collect();

        Catalog { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// Positional cell lookup; short rows read as empty cells
fn cell<'a>(columns: &[String], record: &'a [String], name: &str) -> &'a str {
    columns
        .iter()
        .position(|c| c == name)
        .and_then(|i| record.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// Price as written to disk and shown in the table. Display of f64 already
/// drops a trailing `.0`, so whole prices serialize without decimals.
pub fn format_precio(precio: f64) -> String {
    format!("{}", precio)
}

fn parse_precio(raw: &str) -> f64 {
    let value = raw.trim();
    if value.is_empty() {
        return 0.0;
    }
    match value.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!("Unreadable Precio value '{}', defaulting to 0", value);
            0.0
        }
    }
}

fn parse_stock(raw: &str) -> u32 {
    let value = raw.trim();
    if value.is_empty() {
        return 0;
    }
    if let Ok(v) = value.parse::<u32>() {
        return v;
    }
    // Spreadsheets often hand integers over as floats ("3.0")
    match value.parse::<f64>() {
        Ok(v) if v >= 0.0 => v as u32,
        _ => {
            tracing::warn!("Unreadable Stock value '{}', defaulting to 0", value);
            0
        }
    }
}
