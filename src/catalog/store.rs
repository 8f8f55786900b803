use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::record::BacteriumRecord;
use crate::core::types::RecordKey;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Duplicate record key: {0}")]
    DuplicateKey(RecordKey),

    #[error("Record key must be lowercase and non-blank: {0:?}")]
    InvalidKey(String),

    #[error("Record {0} has a blank alias")]
    BlankAlias(RecordKey),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub records: Vec<BacteriumRecord>,
}

/// The curated bacteria catalog.
///
/// Records keep their insertion order, which the local matcher relies on
/// to break ties between records that both match a query.
#[derive(Debug, Clone, Default)]
pub struct BacteriaCatalog {
    /// All records, in insertion order
    pub records: Vec<BacteriumRecord>,

    /// Index: canonical key -> index in records vec
    key_to_index: HashMap<RecordKey, usize>,
}

impl BacteriaCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/bacteria.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        Self::from_records(data.records)
    }

    /// Build a catalog from records, preserving their order
    pub fn from_records(
        records: impl IntoIterator<Item = BacteriumRecord>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for record in records {
            catalog.add_record(record)?;
        }
        Ok(catalog)
    }

    /// Append a record to the catalog
    pub fn add_record(&mut self, record: BacteriumRecord) -> Result<(), CatalogError> {
        let key = record.key.as_str();
        if key.trim().is_empty() || key != key.to_lowercase() {
            return Err(CatalogError::InvalidKey(key.to_string()));
        }
        if record.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(CatalogError::BlankAlias(record.key));
        }
        if self.key_to_index.contains_key(&record.key) {
            return Err(CatalogError::DuplicateKey(record.key));
        }

        self.key_to_index
            .insert(record.key.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Get a record by canonical key
    pub fn get(&self, key: &RecordKey) -> Option<&BacteriumRecord> {
        self.key_to_index.get(key).map(|&idx| &self.records[idx])
    }

    /// All canonical keys and aliases, keys first per record, in catalog order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().flat_map(|r| {
            std::iter::once(r.key.as_str()).chain(r.aliases.iter().map(String::as_str))
        })
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            records: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of records in catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: &str) -> BacteriumRecord {
        BacteriumRecord::new(key, key, "Test classification", "Test description")
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = BacteriaCatalog::load_embedded().unwrap();
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_embedded_catalog_order() {
        let catalog = BacteriaCatalog::load_embedded().unwrap();
        assert_eq!(catalog.records[0].key.as_str(), "vibrio cholerae");
        assert_eq!(catalog.records[1].key.as_str(), "escherichia coli");
    }

    #[test]
    fn test_catalog_get_by_key() {
        let catalog = BacteriaCatalog::load_embedded().unwrap();

        let ecoli = catalog.get(&RecordKey::new("escherichia coli"));
        assert!(ecoli.is_some());
        let ecoli = ecoli.unwrap();
        assert_eq!(ecoli.display_name, "Escherichia coli");
        assert!(ecoli.aliases.contains(&"e. coli".to_string()));
    }

    #[test]
    fn test_catalog_get_nonexistent() {
        let catalog = BacteriaCatalog::load_embedded().unwrap();
        assert!(catalog.get(&RecordKey::new("yersinia pestis")).is_none());
    }

    #[test]
    fn test_catalog_to_json_round_trips() {
        let catalog = BacteriaCatalog::load_embedded().unwrap();
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"records\""));

        let reloaded = BacteriaCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.records, catalog.records);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = BacteriaCatalog::from_records([record("vibrio"), record("vibrio")]);
        assert!(matches!(result, Err(CatalogError::DuplicateKey(_))));
    }

    #[test]
    fn test_uppercase_key_rejected() {
        let result = BacteriaCatalog::from_records([record("Vibrio")]);
        assert!(matches!(result, Err(CatalogError::InvalidKey(_))));
    }

    #[test]
    fn test_blank_alias_rejected() {
        let result = BacteriaCatalog::from_records([record("vibrio").with_aliases([" "])]);
        assert!(matches!(result, Err(CatalogError::BlankAlias(_))));
    }

    #[test]
    fn test_names_enumeration_order() {
        let catalog = BacteriaCatalog::from_records([
            record("alpha").with_aliases(["a1", "a2"]),
            record("beta").with_aliases(["b1"]),
        ])
        .unwrap();

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["alpha", "a1", "a2", "beta", "b1"]);
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"version":"1.0.0","created_at":"now","records":[
                {{"key":"vibrio","display_name":"Vibrio","classification":"Genus","description":"Curved rods"}}
            ]}}"#
        )
        .unwrap();

        let catalog = BacteriaCatalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
