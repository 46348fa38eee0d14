use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::item::CatalogItem;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Direct lookup-table row mapping a configuration key to an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub key: String,
    pub article: String,
}

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub key_table: Vec<KeyEntry>,
}

/// Immutable, process-lifetime view over the parts catalog.
///
/// Built once at startup and only read afterwards; scans run in catalog
/// declaration order so that first-match heuristics stay deterministic.
#[derive(Debug)]
pub struct CatalogIndex {
    /// All items, in declaration order
    items: Vec<CatalogItem>,

    /// Index: article -> index in items vec
    by_article: HashMap<String, usize>,

    /// Direct key table, in declaration order (scanned by the wildcard tier)
    key_table: Vec<KeyEntry>,

    /// Index: key -> article
    key_to_article: HashMap<String, String>,
}

impl CatalogIndex {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            by_article: HashMap::new(),
            key_table: Vec::new(),
            key_to_article: HashMap::new(),
        }
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/parts.json");
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

        let mut catalog = Self::new();
        for item in data.items {
            catalog.add_item(item);
        }
        for entry in data.key_table {
            catalog.add_key(entry);
        }

        Ok(catalog)
    }

    /// Add an item. On duplicate article the last occurrence wins, replacing
    /// the earlier row in place (compatibility behavior of the source
    /// spreadsheet, not validated as an error).
    pub fn add_item(&mut self, item: CatalogItem) {
        if let Some(&idx) = self.by_article.get(&item.article) {
            self.items[idx] = item;
        } else {
            self.by_article.insert(item.article.clone(), self.items.len());
            self.items.push(item);
        }
    }

    /// Add a key-table row; a repeated key replaces the earlier mapping
    pub fn add_key(&mut self, entry: KeyEntry) {
        if let Some(existing) = self.key_table.iter_mut().find(|e| e.key == entry.key) {
            *existing = entry.clone();
        } else {
            self.key_table.push(entry.clone());
        }
        self.key_to_article.insert(entry.key, entry.article);
    }

    /// Get an item by article
    pub fn lookup_by_article(&self, article: &str) -> Option<&CatalogItem> {
        self.by_article.get(article).map(|&idx| &self.items[idx])
    }

    /// Resolve a configuration key through the direct table
    pub fn lookup_key(&self, key: &str) -> Option<&CatalogItem> {
        self.key_to_article
            .get(key)
            .and_then(|article| self.lookup_by_article(article))
    }

    /// First item satisfying the predicate, in declaration order
    pub fn find_first(&self, predicate: impl Fn(&CatalogItem) -> bool) -> Option<&CatalogItem> {
        self.items.iter().find(|item| predicate(item))
    }

    /// All items satisfying the predicate, in declaration order
    pub fn find_all(&self, predicate: impl Fn(&CatalogItem) -> bool) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    /// Key-table rows in declaration order
    pub fn key_entries(&self) -> &[KeyEntry] {
        &self.key_table
    }

    /// All items in declaration order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            items: self.items.clone(),
            key_table: self.key_table.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of items in catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}
