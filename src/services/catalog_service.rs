use std::path::{Path, PathBuf};
use crate::catalog::codec;
use crate::errors::AppResult;
use crate::models::Catalog;

/// How a load attempt went. The page keeps rendering on every variant; the
/// non-`Loaded` ones just carry a banner for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    /// The catalog file does not exist yet. Normal on first run.
    NoSavedCatalog,
    /// The file exists but could not be read as a table.
    LoadFailed(String),
}

/// Disk-backed catalog store. Every interaction re-reads the file and every
/// mutation overwrites it wholesale; there is no lock and no write-ahead
/// anything. Single-user semantics: concurrent writers would clobber each
/// other, which is an accepted non-goal of this tool.
pub struct CatalogService {
    catalog_path: PathBuf,
}

impl CatalogService {
    pub fn new(data_dir: &str, catalog_file: &str) -> Self {
        Self {
            catalog_path: Path::new(data_dir).join(catalog_file),
        }
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Reads and normalizes the persisted catalog.
    ///
    /// A missing file and an unreadable file both come back as an empty
    /// canonical catalog; the outcome tells them apart so the page can show
    /// the right banner. Decoding tries UTF-8 then Windows-1252.
    pub fn load(&self) -> (Catalog, LoadOutcome) {
        if !self.catalog_path.exists() {
            return (Catalog::empty(), LoadOutcome::NoSavedCatalog);
        }

        let bytes = match std::fs::read(&self.catalog_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to read catalog file {:?}: {}", self.catalog_path, e);
                return (Catalog::empty(), LoadOutcome::LoadFailed(e.to_string()));
            }
        };

        let text = codec::decode_text(&bytes);
        match codec::read_table(&text, b',') {
            Ok((columns, records)) => {
                (Catalog::from_records(columns, records), LoadOutcome::Loaded)
            }
            Err(e) => {
                tracing::error!("Failed to parse catalog file {:?}: {}", self.catalog_path, e);
                (Catalog::empty(), LoadOutcome::LoadFailed(e.to_string()))
            }
        }
    }

    /// Serializes the whole catalog over the persisted file as UTF-8
    /// comma-delimited text. Deliberately not atomic: no temp file, no
    /// rename. A crash mid-write can truncate the file; accepted for a
    /// low-stakes single-user tool.
    pub fn save(&self, catalog: &Catalog) -> AppResult<()> {
        let mut wtr = csv::WriterBuilder::new().from_path(&self.catalog_path)?;

        wtr.write_record(&catalog.columns)?;
        for row in &catalog.rows {
            let record: Vec<String> = catalog
                .columns
                .iter()
                .map(|column| row.field(column))
                .collect();
            wtr.write_record(&record)?;
        }
        wtr.flush()?;

        tracing::info!(
            "Saved catalog ({} rows) to {:?}",
            catalog.rows.len(),
            self.catalog_path
        );
        Ok(())
    }
}

impl Clone for CatalogService {
    fn clone(&self) -> Self {
        Self {
            catalog_path: self.catalog_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{edit, import};
    use crate::models::CANONICAL_COLUMNS;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> CatalogService {
        CatalogService::new(dir.path().to_str().unwrap(), "inventario_actualizado.csv")
    }

    #[test]
    fn test_load_missing_file_yields_empty_canonical_catalog() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let (catalog, outcome) = service.load();
        assert_eq!(outcome, LoadOutcome::NoSavedCatalog);
        assert!(catalog.is_empty());
        assert_eq!(catalog.columns, CANONICAL_COLUMNS.to_vec());
    }

    #[test]
    fn test_save_load_round_trip_with_extras() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let mut columns: Vec<String> = CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.push("Proveedor".into());
        let catalog = Catalog::from_records(
            columns,
            vec![vec!["1".into(), "Tubo PVC".into(), "Tubería".into(), "PVC".into(), "10.5".into(), "3".into(), "ACME".into()]],
        );
        service.save(&catalog).unwrap();

        let (reloaded, outcome) = service.load();
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_load_normalizes_missing_stock_column() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        std::fs::write(
            service.catalog_path(),
            "ID,Nombre,Categoría,Subcategoría,Precio\n1,Tubo,T,P,3\n2,Codo,T,P,1.5\n",
        )
        .unwrap();

        let (catalog, outcome) = service.load();
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert!(catalog.rows.iter().all(|row| row.stock == 0));
    }

    #[test]
    fn test_load_windows_1252_file() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);
        std::fs::write(
            service.catalog_path(),
            b"ID,Nombre,Categor\xeda,Subcategor\xeda,Precio,Stock\n1,Ca\xf1er\xeda,T,P,3,2\n",
        )
        .unwrap();

        let (catalog, outcome) = service.load();
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(catalog.rows[0].nombre, "Cañería");
    }

    #[test]
    fn test_edit_commit_round_trip() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let mut catalog = Catalog::from_records(
            CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![
                vec!["1".into(), "Tubo".into(), "T".into(), "P".into(), "5".into(), "1".into()],
                vec!["1".into(), "Tubo lote B".into(), "T".into(), "P".into(), "6".into(), "9".into()],
            ],
        );
        service.save(&catalog).unwrap();

        edit::apply_edit(&mut catalog, "1", 10.5, 3).unwrap();
        service.save(&catalog).unwrap();

        let (reloaded, _) = service.load();
        // duplicate IDs: both rows carry the new values
        assert!(reloaded.rows.iter().all(|row| row.precio == 10.5 && row.stock == 3));
    }

    #[test]
    fn test_failed_import_leaves_persisted_catalog_untouched() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let catalog = Catalog::from_records(
            CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![vec!["1".into(), "Tubo".into(), "T".into(), "P".into(), "3".into(), "2".into()]],
        );
        service.save(&catalog).unwrap();
        let before = std::fs::read(service.catalog_path()).unwrap();

        // missing Categoría: the import fails before anything is persisted
        let result = import::import_table("nuevo.csv", b"ID,Nombre,Subcategoria\n9,Valvula,Bronce\n");
        assert!(result.is_err());

        let after = std::fs::read(service.catalog_path()).unwrap();
        assert_eq!(before, after);
    }
}
