//! Multi-product comparison
//!
//! Resolves a bounded list of product ids and derives summary statistics:
//! price and stock extremes, averages, spreads, and shared categories.
//!
//! # Rules
//!
//! - 2 to 10 ids per request, checked before any store read
//! - Ids with no product are dropped silently
//! - Fewer than 2 resolved products is an error
//! - Store errors propagate without retry

mod engine;
mod errors;
mod summary;

pub use engine::{ComparisonEngine, ComparisonRequest, ProductComparison};
pub use errors::{ComparisonError, ComparisonErrorCode, ComparisonResult, Severity};
pub use summary::ComparisonSummary;

/// Fewest products a comparison accepts
pub const MIN_COMPARE_ITEMS: usize = 2;

/// Most products a comparison accepts
pub const MAX_COMPARE_ITEMS: usize = 10;
