//! # Catalog Errors

use thiserror::Error;

use super::product::ProductId;

/// Result type for catalog store operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog store errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Backing store could not be reached or read
    #[error("Catalog store unavailable: {0}")]
    Unavailable(String),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    #[error("Duplicate category id: {0}")]
    DuplicateCategory(i64),

    /// A record violates a catalog invariant
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed catalog: {0}")]
    Malformed(String),
}

impl CatalogError {
    /// Returns true when the error means the store itself is unreachable
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CatalogError::Unavailable(_))
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Malformed(e.to_string())
    }
}
