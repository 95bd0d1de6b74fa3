//! Catalog store contract and the in-memory implementation
//!
//! The engine only needs three things from a store:
//! - point lookup by product id
//! - a full scan in id order
//! - a filtered, ordered, paged query with a total match count
//!
//! `query` has a provided implementation over `scan`, so a store only has to
//! override it when it can push predicates down natively.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::executor::{PredicateFilter, ResultSorter};
use crate::planner::{OrderSpec, Predicate};

use super::errors::{CatalogError, CatalogResult};
use super::product::{Category, Product, ProductId};

/// Read access to a product catalog
pub trait CatalogStore {
    /// Looks up a single product. `Ok(None)` when the id is unknown.
    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Returns every product in id-ascending order.
    fn scan(&self) -> CatalogResult<Vec<Product>>;

    /// Applies conjunctive predicates, orders, then slices `skip..skip+take`.
    ///
    /// The returned count covers the filtered set before slicing.
    fn query(
        &self,
        predicates: &[Predicate],
        order: &OrderSpec,
        skip: usize,
        take: usize,
    ) -> CatalogResult<(Vec<Product>, usize)> {
        let mut matching: Vec<Product> = self
            .scan()?
            .into_iter()
            .filter(|p| PredicateFilter::matches(p, predicates))
            .collect();

        ResultSorter::sort(&mut matching, order);

        let total = matching.len();
        let page = matching.into_iter().skip(skip).take(take).collect();
        Ok((page, total))
    }
}

/// In-memory catalog keyed by product id.
///
/// Category names are joined onto products at read time.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: BTreeMap<ProductId, Product>,
    categories: BTreeMap<i64, Category>,
}

impl MemoryCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a category. Duplicate ids are rejected.
    pub fn add_category(&mut self, category: Category) -> CatalogResult<()> {
        if self.categories.contains_key(&category.id) {
            return Err(CatalogError::DuplicateCategory(category.id));
        }
        self.categories.insert(category.id, category);
        Ok(())
    }

    /// Inserts a product after checking record invariants.
    pub fn insert(&mut self, product: Product) -> CatalogResult<()> {
        Self::validate_product(&product)?;
        if self.products.contains_key(&product.id) {
            return Err(CatalogError::DuplicateProduct(product.id));
        }
        self.products.insert(product.id, product);
        Ok(())
    }

    /// Number of products held
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of categories held
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn validate_product(product: &Product) -> CatalogResult<()> {
        let invalid = |reason: &str| CatalogError::InvalidProduct {
            id: product.id,
            reason: reason.to_string(),
        };

        if product.id == 0 {
            return Err(invalid("id must be positive"));
        }
        if product.price < Decimal::ZERO {
            return Err(invalid("price must be non-negative"));
        }
        if let Some(discount) = product.discount_percentage {
            if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
                return Err(invalid("discount percentage must be between 0 and 100"));
            }
        }
        Ok(())
    }

    fn resolve(&self, product: &Product) -> Product {
        let mut resolved = product.clone();
        resolved.category_name = product
            .category_id
            .and_then(|id| self.categories.get(&id))
            .map(|c| c.name.clone());
        resolved
    }
}

impl CatalogStore for MemoryCatalog {
    fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| self.resolve(p)))
    }

    fn scan(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.values().map(|p| self.resolve(p)).collect())
    }
}
