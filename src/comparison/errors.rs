//! Comparison error types
//!
//! Error codes:
//! - STOCK_INSUFFICIENT_ITEMS (REJECT)
//! - STOCK_TOO_MANY_ITEMS (REJECT)
//! - STOCK_STORE_UNAVAILABLE (ERROR)

use std::fmt;

use crate::catalog::CatalogError;

use super::{MAX_COMPARE_ITEMS, MIN_COMPARE_ITEMS};

/// Severity levels for comparison errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller input rejected
    Reject,
    /// Store failure
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Comparison-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonErrorCode {
    /// Fewer than two ids requested, or fewer than two resolved
    StockInsufficientItems,
    /// More than ten ids requested
    StockTooManyItems,
    /// Catalog store failed during resolution
    StockStoreUnavailable,
}

impl ComparisonErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ComparisonErrorCode::StockInsufficientItems => "STOCK_INSUFFICIENT_ITEMS",
            ComparisonErrorCode::StockTooManyItems => "STOCK_TOO_MANY_ITEMS",
            ComparisonErrorCode::StockStoreUnavailable => "STOCK_STORE_UNAVAILABLE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ComparisonErrorCode::StockStoreUnavailable => Severity::Error,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for ComparisonErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Comparison error type
#[derive(Debug)]
pub struct ComparisonError {
    code: ComparisonErrorCode,
    message: String,
    source: Option<CatalogError>,
}

impl ComparisonError {
    /// Fewer than two ids were supplied
    pub fn insufficient_items(requested: usize) -> Self {
        Self {
            code: ComparisonErrorCode::StockInsufficientItems,
            message: format!(
                "At least {} products are required for comparison, got {}",
                MIN_COMPARE_ITEMS, requested
            ),
            source: None,
        }
    }

    /// Enough ids were supplied but too few exist in the catalog
    pub fn insufficient_resolved(resolved: usize) -> Self {
        Self {
            code: ComparisonErrorCode::StockInsufficientItems,
            message: format!(
                "At least {} valid products are required for comparison, found {}",
                MIN_COMPARE_ITEMS, resolved
            ),
            source: None,
        }
    }

    /// More than ten ids were supplied
    pub fn too_many_items(requested: usize) -> Self {
        Self {
            code: ComparisonErrorCode::StockTooManyItems,
            message: format!(
                "Maximum {} products can be compared at once, got {}",
                MAX_COMPARE_ITEMS, requested
            ),
            source: None,
        }
    }

    /// Create a store unavailable error
    pub fn store_unavailable(source: CatalogError) -> Self {
        Self {
            code: ComparisonErrorCode::StockStoreUnavailable,
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ComparisonErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the store error, if this came from the store
    pub fn store_error(&self) -> Option<&CatalogError> {
        self.source.as_ref()
    }
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ComparisonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<CatalogError> for ComparisonError {
    fn from(e: CatalogError) -> Self {
        Self::store_unavailable(e)
    }
}

/// Result type for comparison operations
pub type ComparisonResult<T> = Result<T, ComparisonError>;
