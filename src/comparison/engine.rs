//! Comparison engine
//!
//! Checks cardinality, resolves ids through the catalog store, then
//! summarizes. Unknown ids are dropped; the comparison only fails if fewer
//! than two products remain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStore, Product, ProductId};

use super::errors::{ComparisonError, ComparisonResult};
use super::summary::ComparisonSummary;
use super::{MAX_COMPARE_ITEMS, MIN_COMPARE_ITEMS};

/// Ordered list of product ids to compare
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_ids: Vec<ProductId>,
}

impl ComparisonRequest {
    pub fn new(product_ids: Vec<ProductId>) -> Self {
        Self { product_ids }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ProductId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ProductId>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolved products plus their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComparison {
    pub products: Vec<Product>,
    pub summary: ComparisonSummary,
    pub compared_at: DateTime<Utc>,
}

/// Comparison engine bound to a catalog store
pub struct ComparisonEngine<'a, S: CatalogStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore> ComparisonEngine<'a, S> {
    /// Creates a new engine
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Compares the requested products, stamped with the current time.
    pub fn compare(&self, request: &ComparisonRequest) -> ComparisonResult<ProductComparison> {
        self.compare_at(request, Utc::now())
    }

    /// Compares the requested products with an explicit timestamp.
    pub fn compare_at(
        &self,
        request: &ComparisonRequest,
        compared_at: DateTime<Utc>,
    ) -> ComparisonResult<ProductComparison> {
        Self::check_cardinality(&request.product_ids)?;

        let products = self.resolve(&request.product_ids)?;
        if products.len() < MIN_COMPARE_ITEMS {
            return Err(ComparisonError::insufficient_resolved(products.len()));
        }

        let summary = ComparisonSummary::compute(&products)
            .ok_or_else(|| ComparisonError::insufficient_resolved(0))?;

        Ok(ProductComparison {
            products,
            summary,
            compared_at,
        })
    }

    /// Cardinality is checked before any store access.
    pub fn check_cardinality(ids: &[ProductId]) -> ComparisonResult<()> {
        if ids.len() < MIN_COMPARE_ITEMS {
            return Err(ComparisonError::insufficient_items(ids.len()));
        }
        if ids.len() > MAX_COMPARE_ITEMS {
            return Err(ComparisonError::too_many_items(ids.len()));
        }
        Ok(())
    }

    /// Looks up each id in request order, skipping ids with no product.
    fn resolve(&self, ids: &[ProductId]) -> ComparisonResult<Vec<Product>> {
        let mut products = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(product) = self.store.find_by_id(*id)? {
                products.push(product);
            }
        }
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, CatalogResult, Category, MemoryCatalog};
    use crate::comparison::ComparisonErrorCode;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::cell::Cell;

    /// Store that counts lookups and can be switched off
    struct ProbeStore {
        inner: MemoryCatalog,
        lookups: Cell<usize>,
        down: bool,
    }

    impl CatalogStore for ProbeStore {
        fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
            self.lookups.set(self.lookups.get() + 1);
            if self.down {
                return Err(CatalogError::Unavailable("store offline".into()));
            }
            self.inner.find_by_id(id)
        }

        fn scan(&self) -> CatalogResult<Vec<Product>> {
            self.inner.scan()
        }
    }

    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.add_category(Category::new(1, "Tools")).unwrap();
        catalog.add_category(Category::new(2, "Garden")).unwrap();
        catalog
            .insert(Product::new(1, "Drill", Decimal::new(1000, 2), 5).with_category(1))
            .unwrap();
        catalog
            .insert(Product::new(2, "Saw", Decimal::new(2000, 2), 9).with_category(1))
            .unwrap();
        catalog
            .insert(Product::new(3, "Hose", Decimal::new(1500, 2), 2).with_category(2))
            .unwrap();
        catalog
    }

    fn probe(down: bool) -> ProbeStore {
        ProbeStore {
            inner: catalog(),
            lookups: Cell::new(0),
            down,
        }
    }

    fn request(ids: &[ProductId]) -> ComparisonRequest {
        ComparisonRequest::new(ids.to_vec())
    }

    #[test]
    fn test_compare_two() {
        let store = catalog();
        let result = ComparisonEngine::new(&store).compare(&request(&[1, 2])).unwrap();

        assert_eq!(result.summary.price_difference, Decimal::new(1000, 2));
        assert_eq!(result.summary.highest_price, Decimal::new(2000, 2));
        assert_eq!(result.summary.common_categories, vec!["Tools"]);
        assert_eq!(result.products.len(), 2);
    }

    #[test]
    fn test_resolution_keeps_request_order() {
        let store = catalog();
        let result = ComparisonEngine::new(&store).compare(&request(&[3, 1, 2])).unwrap();
        let ids: Vec<_> = result.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(result.summary.average_price, Decimal::from(15));
    }

    #[test]
    fn test_cardinality_checked_before_store() {
        for ids in [&[][..], &[1][..], &[1; 11][..]] {
            let store = probe(false);
            let err = ComparisonEngine::new(&store).compare(&request(ids)).unwrap_err();
            assert_eq!(store.lookups.get(), 0);
            let expected = if ids.len() > MAX_COMPARE_ITEMS {
                ComparisonErrorCode::StockTooManyItems
            } else {
                ComparisonErrorCode::StockInsufficientItems
            };
            assert_eq!(err.code(), expected);
        }
    }

    #[test]
    fn test_ten_is_allowed() {
        assert!(ComparisonEngine::<MemoryCatalog>::check_cardinality(&[1; 10]).is_ok());
        assert!(ComparisonEngine::<MemoryCatalog>::check_cardinality(&[1; 2]).is_ok());
    }

    #[test]
    fn test_unknown_ids_dropped() {
        let store = catalog();
        let result = ComparisonEngine::new(&store)
            .compare(&request(&[1, 404, 3]))
            .unwrap();
        assert_eq!(result.summary.total_products_compared, 2);
    }

    #[test]
    fn test_too_few_resolved() {
        let store = catalog();
        let err = ComparisonEngine::new(&store)
            .compare(&request(&[1, 404, 405]))
            .unwrap_err();
        assert_eq!(err.code(), ComparisonErrorCode::StockInsufficientItems);
    }

    #[test]
    fn test_store_failure_propagates() {
        let store = probe(true);
        let err = ComparisonEngine::new(&store).compare(&request(&[1, 2])).unwrap_err();
        assert_eq!(err.code(), ComparisonErrorCode::StockStoreUnavailable);
        assert_eq!(store.lookups.get(), 1);
    }

    #[test]
    fn test_timestamp_is_stamped() {
        let store = catalog();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let result = ComparisonEngine::new(&store)
            .compare_at(&request(&[1, 2]), at)
            .unwrap();
        assert_eq!(result.compared_at, at);
    }

    #[test]
    fn test_null_ids_deserialize_empty() {
        let req: ComparisonRequest = serde_json::from_str(r#"{"product_ids":null}"#).unwrap();
        assert!(req.product_ids.is_empty());
        let req: ComparisonRequest = serde_json::from_str("{}").unwrap();
        assert!(req.product_ids.is_empty());
    }
}
