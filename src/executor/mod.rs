//! Query executor for product search
//!
//! Consumes compiled queries and produces deterministic pages.
//!
//! # Execution Flow (strict order)
//!
//! 1. Read products from the catalog store
//! 2. Filter strictly according to predicates (AND)
//! 3. Sort by primary, secondary, then id ascending
//! 4. Count the filtered set
//! 5. Slice the requested page
//!
//! # Invariants
//!
//! - Same query + same store snapshot = same page
//! - `items.len() <= page_size`
//! - `total_pages == ceil(total_records / page_size)`
//! - Store errors propagate, never retried

mod errors;
mod executor;
mod filters;
mod result;
mod sorter;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult, Severity};
pub use executor::QueryExecutor;
pub use filters::PredicateFilter;
pub use result::PagedResult;
pub use sorter::ResultSorter;
