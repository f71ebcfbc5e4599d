use crate::errors::{AppError, AppResult};
use crate::models::{Catalog, ProductRow};

/// First row whose ID equals `id` exactly. With duplicated IDs the first
/// occurrence wins; duplicates are an accepted data-entry reality here, not
/// something this layer deduplicates.
pub fn first_by_id<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a ProductRow> {
    catalog.rows.iter().find(|row| row.id == id)
}

/// Total value of a product line. Display formatting is the caller's concern.
pub fn compute_total(precio: f64, stock: u32) -> f64 {
    precio * stock as f64
}

/// Overwrites Precio and Stock on every row matching `id` and returns how
/// many rows changed. Rejects negative prices; the form widget enforces
/// this too, but the invariant belongs to the data model, not the widget.
pub fn apply_edit(catalog: &mut Catalog, id: &str, precio: f64, stock: u32) -> AppResult<usize> {
    if precio < 0.0 {
        return Err(AppError::Edit("El precio no puede ser negativo".to_string()));
    }

    let mut updated = 0;
    for row in catalog.rows.iter_mut().filter(|row| row.id == id) {
        row.precio = precio;
        row.stock = stock;
        updated += 1;
    }

    if updated == 0 {
        return Err(AppError::Edit(format!("No existe un producto con ID {}", id)));
    }
    Ok(updated)
}

/// Two-decimal currency presentation with thousands grouping, e.g. `$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int_part, dec_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("${}{}.{}", sign, int_grouped, dec_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, CANONICAL_COLUMNS};

    fn catalog_with_duplicate_id() -> Catalog {
        Catalog::from_records(
            CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![
                vec!["1".into(), "Tubo PVC".into(), "Tubería".into(), "PVC".into(), "5".into(), "1".into()],
                vec!["2".into(), "Codo PVC".into(), "Tubería".into(), "PVC".into(), "2".into(), "4".into()],
                vec!["1".into(), "Tubo PVC lote B".into(), "Tubería".into(), "PVC".into(), "6".into(), "9".into()],
            ],
        )
    }

    #[test]
    fn test_compute_total() {
        assert_eq!(compute_total(10.5, 3), 31.5);
        assert_eq!(compute_total(0.0, 100), 0.0);
    }

    #[test]
    fn test_first_by_id_takes_first_match() {
        let catalog = catalog_with_duplicate_id();
        let row = first_by_id(&catalog, "1").unwrap();
        assert_eq!(row.nombre, "Tubo PVC");
        assert!(first_by_id(&catalog, "99").is_none());
    }

    #[test]
    fn test_apply_edit_updates_all_matching_rows() {
        let mut catalog = catalog_with_duplicate_id();
        let updated = apply_edit(&mut catalog, "1", 10.5, 3).unwrap();
        assert_eq!(updated, 2);
        assert_eq!(catalog.rows[0].precio, 10.5);
        assert_eq!(catalog.rows[0].stock, 3);
        assert_eq!(catalog.rows[2].precio, 10.5);
        assert_eq!(catalog.rows[2].stock, 3);
        // unrelated row untouched
        assert_eq!(catalog.rows[1].precio, 2.0);
    }

    #[test]
    fn test_apply_edit_rejects_negative_price() {
        let mut catalog = catalog_with_duplicate_id();
        let err = apply_edit(&mut catalog, "1", -1.0, 3).unwrap_err();
        assert!(matches!(err, AppError::Edit(_)));
        assert_eq!(catalog.rows[0].precio, 5.0);
    }

    #[test]
    fn test_apply_edit_unknown_id() {
        let mut catalog = catalog_with_duplicate_id();
        assert!(apply_edit(&mut catalog, "99", 1.0, 1).is_err());
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(31.5), "$31.50");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.0), "$1,234,567.00");
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
