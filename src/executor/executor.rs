//! Query executor
//!
//! Executes compiled queries against a catalog store, producing
//! deterministic pages.
//!
//! Execution flow (strict order):
//! 1. Evaluate predicates over the catalog (AND)
//! 2. Order by primary, secondary, then id
//! 3. Count the filtered set
//! 4. Slice skip = (page - 1) * size, take = size
//!
//! The executor trusts the compiler's output and does not re-validate.

use crate::catalog::{CatalogStore, Product};
use crate::planner::CompiledQuery;

use super::errors::ExecutorResult;
use super::result::PagedResult;

/// Query executor bound to a catalog store
pub struct QueryExecutor<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> QueryExecutor<'a, S> {
    /// Creates a new executor
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Executes a compiled query and returns one page.
    ///
    /// A page past the end yields no items but the true total.
    pub fn execute(&self, query: &CompiledQuery) -> ExecutorResult<PagedResult<Product>> {
        let (items, total) = self.store.query(
            &query.predicates,
            &query.order,
            query.skip(),
            query.take(),
        )?;

        Ok(PagedResult::new(
            items,
            query.page_number,
            query.page_size,
            total,
        ))
    }

    /// Products whose stock is strictly below `threshold`, in id order.
    pub fn below_threshold(&self, threshold: u32) -> ExecutorResult<Vec<Product>> {
        Ok(self
            .store
            .scan()?
            .into_iter()
            .filter(|p| p.stock < threshold)
            .collect())
    }
}
