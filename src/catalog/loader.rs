//! Catalog loader for reading a JSON catalog file at startup
//!
//! File shape: `{"categories": [...], "products": [...]}`.
//! Both arrays are optional. Any invalid record fails the whole load.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::errors::{CatalogError, CatalogResult};
use super::product::{Category, Product};
use super::store::MemoryCatalog;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    products: Vec<Product>,
}

/// Builds a `MemoryCatalog` from serialized catalog data.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Reads and validates the catalog file at `path`.
    pub fn load(path: &Path) -> CatalogResult<MemoryCatalog> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parses catalog JSON held in memory.
    pub fn from_json(json: &str) -> CatalogResult<MemoryCatalog> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = MemoryCatalog::new();
        for category in file.categories {
            catalog.add_category(category)?;
        }
        for mut product in file.products {
            // Names are always resolved from the category table
            product.category_name = None;
            catalog.insert(product)?;
        }
        Ok(catalog)
    }
}
