//! Catalog loading and validation
//!
//! The bundled catalog is compiled into the binary from `data/catalog.json`.
//! A configured external file replaces it entirely; the two are never merged.

use crate::catalog::models::AppRecord;
use crate::error::{PortalError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Catalog JSON shipped with the application
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Immutable, ordered list of applications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<AppRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids
    pub fn new(records: Vec<AppRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(PortalError::InvalidCatalog(format!(
                    "application \"{}\" has an empty id",
                    record.name
                )));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(PortalError::DuplicateAppId(record.id.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<AppRecord> =
            serde_json::from_str(json).map_err(|e| PortalError::InvalidCatalog(e.to_string()))?;
        Self::new(records)
    }

    /// The catalog compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Read a catalog file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the configured catalog, or the bundled one when no override is set
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let catalog = match override_path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                debug!("Loading bundled catalog");
                Self::bundled()?
            }
        };

        info!("Catalog loaded with {} applications", catalog.len());
        Ok(catalog)
    }

    /// Records in catalog order
    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&AppRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Whether a record with `id` exists
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Category;
    use crate::test_utils::create_test_dir;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());

        // Every category has at least one entry so no selector tab starts empty
        for category in Category::VARIANTS {
            assert!(
                catalog.records().iter().any(|r| r.category == category),
                "bundled catalog has no {category} entries"
            );
        }
    }

    #[test]
    fn test_bundled_records_have_links() {
        let catalog = Catalog::bundled().unwrap();
        for record in catalog.records() {
            assert!(record.url.starts_with("https://"), "{} has no link", record.id);
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            AppRecord::new("a", "Payroll", Category::Prod),
            AppRecord::new("a", "Tickets", Category::Uat),
        ]);
        assert!(matches!(result, Err(PortalError::DuplicateAppId(id)) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Catalog::new(vec![AppRecord::new("  ", "Payroll", Category::Prod)]);
        assert!(matches!(result, Err(PortalError::InvalidCatalog(_))));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = Catalog::from_json(r#"[{"id":"a","name":"Payroll","category":"HR"}]"#);
        assert!(matches!(result, Err(PortalError::InvalidCatalog(_))));
    }

    #[test]
    fn test_order_preserved_and_lookup() {
        let catalog = Catalog::from_json(
            r#"[
                {"id":"b","name":"Tickets","category":"UAT"},
                {"id":"a","name":"Payroll","category":"PROD"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<_> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(catalog.get("a").map(|r| r.name.as_str()), Some("Payroll"));
        assert!(!catalog.contains("zzz"));
    }

    #[test]
    fn test_load_override_file() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("catalog.json");
        std::fs::write(&path, r#"[{"id":"x","name":"Only One","category":"DEV"}]"#).unwrap();

        let catalog = Catalog::load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].id, "x");
    }

    #[test]
    fn test_load_missing_override_fails() {
        let temp_dir = create_test_dir();
        let result = Catalog::load(Some(&temp_dir.path().join("missing.json")));
        assert!(matches!(result, Err(PortalError::IoError(_))));
    }
}
