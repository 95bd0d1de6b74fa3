//! Comparison Invariant Tests
//!
//! Tests for comparison invariants:
//! - Cardinality is 2..=10 and checked before resolution
//! - Unknown ids are dropped, not errors
//! - Extremes tie-break on first occurrence
//! - Category comparison clamps its limit

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use stockquery::api::{clamp_comparison_limit, ApiHandler, CategoryCompareRequest};
use stockquery::catalog::{CatalogLoader, MemoryCatalog, Product};
use stockquery::comparison::{
    ComparisonEngine, ComparisonErrorCode, ComparisonRequest, ComparisonResult, ProductComparison,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn catalog() -> MemoryCatalog {
    let mut products = Vec::new();
    for id in 1..=14u64 {
        let category_id = if id % 5 == 0 {
            Value::Null
        } else {
            json!((id % 3) + 1)
        };
        products.push(json!({
            "id": id,
            "name": format!("Product {:02}", id),
            "price": 10 + (id % 4) * 5,
            "stock": id * 3,
            "category_id": category_id
        }));
    }
    CatalogLoader::from_json(
        &json!({
            "categories": [
                {"id": 1, "name": "Tools"},
                {"id": 2, "name": "Garden"},
                {"id": 3, "name": "Paint"}
            ],
            "products": products
        })
        .to_string(),
    )
    .unwrap()
}

fn compare(store: &MemoryCatalog, ids: &[u64]) -> ComparisonResult<ProductComparison> {
    ComparisonEngine::new(store).compare(&ComparisonRequest::new(ids.to_vec()))
}

// =============================================================================
// Cardinality Tests
// =============================================================================

/// Zero or one id is insufficient; eleven is too many.
#[test]
fn test_cardinality_bounds() {
    let store = catalog();

    for ids in [vec![], vec![1]] {
        let err = compare(&store, &ids).unwrap_err();
        assert_eq!(err.code(), ComparisonErrorCode::StockInsufficientItems);
    }

    let eleven: Vec<u64> = (1..=11).collect();
    let err = compare(&store, &eleven).unwrap_err();
    assert_eq!(err.code(), ComparisonErrorCode::StockTooManyItems);

    let ten: Vec<u64> = (1..=10).collect();
    assert_eq!(
        compare(&store, &ten).unwrap().summary.total_products_compared,
        10
    );
}

/// Eleven ids fail even when most of them do not exist.
#[test]
fn test_cardinality_checked_before_resolution() {
    let store = catalog();
    let ids: Vec<u64> = (1..=2).chain(900..909).collect();
    assert_eq!(ids.len(), 11);

    let err = compare(&store, &ids).unwrap_err();
    assert_eq!(err.code(), ComparisonErrorCode::StockTooManyItems);
}

/// Unknown ids are dropped until fewer than two remain.
#[test]
fn test_unknown_ids_dropped() {
    let store = catalog();

    let result = compare(&store, &[404, 2, 405, 3]).unwrap();
    assert_eq!(result.summary.total_products_compared, 2);

    let err = compare(&store, &[404, 2, 405]).unwrap_err();
    assert_eq!(err.code(), ComparisonErrorCode::StockInsufficientItems);
}

// =============================================================================
// Summary Tests
// =============================================================================

/// Spread and extremes for two products.
#[test]
fn test_price_difference() {
    let store = CatalogLoader::from_json(
        r#"{"products": [
            {"id": 1, "name": "A", "price": 10.00, "stock": 1},
            {"id": 2, "name": "B", "price": 20.00, "stock": 5}
        ]}"#,
    )
    .unwrap();

    let summary = compare(&store, &[1, 2]).unwrap().summary;
    assert_eq!(summary.price_difference, Decimal::from(10));
    assert_eq!(summary.highest_price, Decimal::from(20));
    assert_eq!(summary.stock_difference, 4);
}

/// Mean over [10, 20, 15].
#[test]
fn test_average_price() {
    let store = CatalogLoader::from_json(
        r#"{"products": [
            {"id": 1, "name": "A", "price": 10, "stock": 1},
            {"id": 2, "name": "B", "price": 20, "stock": 2},
            {"id": 3, "name": "C", "price": 15, "stock": 4}
        ]}"#,
    )
    .unwrap();

    let summary = compare(&store, &[1, 2, 3]).unwrap().summary;
    assert_eq!(summary.average_price, Decimal::from(15));
    assert_eq!(summary.lowest_price, Decimal::from(10));
    assert_eq!(summary.highest_price, Decimal::from(20));
    assert!((summary.average_stock - 7.0 / 3.0).abs() < 1e-12);
}

/// Tied extremes resolve to the first id in request order.
#[test]
fn test_first_occurrence_wins() {
    let store = catalog();
    // Prices: 4 -> 10, 8 -> 10, 3 -> 25, 7 -> 25
    let summary = compare(&store, &[8, 7, 4, 3]).unwrap().summary;
    assert_eq!(summary.cheapest.id, 8);
    assert_eq!(summary.most_expensive.id, 7);

    let summary = compare(&store, &[4, 3, 8, 7]).unwrap().summary;
    assert_eq!(summary.cheapest.id, 4);
    assert_eq!(summary.most_expensive.id, 3);
}

/// Shared categories exclude uncategorized products and singletons.
#[test]
fn test_common_categories() {
    let store = catalog();
    // Categories: 1 -> Garden, 2 -> Paint, 4 -> Garden, 5 -> none, 10 -> none, 3 -> Tools
    let summary = compare(&store, &[1, 2, 4, 5, 10, 3]).unwrap().summary;
    assert_eq!(summary.common_categories, vec!["Garden"]);
}

/// Prices whose sum exceeds the decimal range still average correctly.
#[test]
fn test_huge_prices_compare() {
    let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
    let mut store = MemoryCatalog::new();
    store.insert(Product::new(1, "A", huge, 3)).unwrap();
    store.insert(Product::new(2, "B", huge, 5)).unwrap();

    let handler = ApiHandler::new(store);
    let response = handler.handle(r#"{"op":"compare","product_ids":[1,2]}"#);
    assert!(response.is_success());

    let summary = compare(handler.store(), &[1, 2]).unwrap().summary;
    assert_eq!(summary.average_price, huge);
    assert_eq!(summary.stock_difference, 2);
}

/// Same request, same summary.
#[test]
fn test_comparison_deterministic() {
    let store = catalog();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let request = ComparisonRequest::new(vec![6, 2, 9, 11]);
    let engine = ComparisonEngine::new(&store);

    let first = engine.compare_at(&request, at).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.compare_at(&request, at).unwrap(), first);
    }
}

// =============================================================================
// Category Comparison Tests
// =============================================================================

/// Limits below 2 and above 10 are clamped.
#[test]
fn test_limit_clamping() {
    assert_eq!(clamp_comparison_limit(1), 2);
    assert_eq!(clamp_comparison_limit(15), 10);

    let handler = ApiHandler::new(catalog());
    // Category 2 (Garden) holds ids 1, 4, 7, 13
    let low = handler
        .compare_category(&CategoryCompareRequest {
            category_id: 2,
            limit: Some(1),
        })
        .unwrap();
    let ids: Vec<_> = low.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 4]);

    let high = handler
        .compare_category(&CategoryCompareRequest {
            category_id: 2,
            limit: Some(15),
        })
        .unwrap();
    assert_eq!(high.summary.total_products_compared, 4);
}

/// A category with fewer than two products cannot be compared.
#[test]
fn test_category_too_small() {
    let handler = ApiHandler::new(catalog());
    let err = handler
        .compare_category(&CategoryCompareRequest {
            category_id: 99,
            limit: None,
        })
        .unwrap_err();
    assert_eq!(err.code(), "STOCK_INSUFFICIENT_ITEMS");
}
