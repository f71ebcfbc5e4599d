use crate::models::{Catalog, ProductRow};

/// Case-insensitive substring search across every column of every row.
///
/// The empty query is the identity: the full catalog comes back in order.
/// Otherwise a row is included when any of its cells (typed fields and
/// extras alike) contains the query. Plain linear scan, recomputed per
/// call; the catalog is small enough that nothing smarter is warranted.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a ProductRow> {
    if query.is_empty() {
        return catalog.rows.iter().collect();
    }

    let needle = query.to_lowercase();
    catalog
        .rows
        .iter()
        .filter(|row| {
            catalog
                .columns
                .iter()
                .any(|column| row.field(column).to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, CANONICAL_COLUMNS};

    fn sample_catalog() -> Catalog {
        Catalog::from_records(
            CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![
                vec!["1".into(), "Tubo PVC".into(), "Tubería".into(), "PVC".into(), "10.5".into(), "3".into()],
                vec!["2".into(), "Codo PVC".into(), "Tubería".into(), "PVC".into(), "2.75".into(), "40".into()],
                vec!["3".into(), "Llave de paso".into(), "Grifería".into(), "Bronce".into(), "15".into(), "8".into()],
            ],
        )
    }

    #[test]
    fn test_search_is_case_insensitive_and_order_preserving() {
        let catalog = sample_catalog();
        let results = filter(&catalog, "pvc");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].nombre, "Tubo PVC");
        assert_eq!(results[1].nombre, "Codo PVC");
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, "").len(), 3);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, "zzz").is_empty());
    }

    #[test]
    fn test_search_matches_any_column() {
        let catalog = sample_catalog();
        // matches on Categoría, not Nombre
        let results = filter(&catalog, "grifería");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "3");
        // matches on ID (Precio 2.75 hits too, same row)
        assert_eq!(filter(&catalog, "2").len(), 1);
    }

    #[test]
    fn test_search_sees_extra_columns() {
        let mut columns: Vec<String> = CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.push("Proveedor".into());
        let catalog = Catalog::from_records(
            columns,
            vec![vec!["1".into(), "Tubo".into(), "T".into(), "P".into(), "3".into(), "2".into(), "ACME".into()]],
        );
        assert_eq!(filter(&catalog, "acme").len(), 1);
    }
}
