//! Result sorting for query execution
//!
//! Two-level ordering with a final id-ascending tie-break, so the output is
//! fully determined by the order spec regardless of input order.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::planner::{OrderSpec, SortDirection, SortField, SortSpec};

/// Sorts products
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts products according to the order spec.
    ///
    /// Sort is stable and deterministic.
    pub fn sort(products: &mut [Product], order: &OrderSpec) {
        products.sort_by(|a, b| Self::compare(a, b, order));
    }

    /// Full comparison: primary, then secondary, then id ascending
    pub fn compare(a: &Product, b: &Product, order: &OrderSpec) -> Ordering {
        Self::compare_spec(a, b, &order.primary)
            .then_with(|| match &order.secondary {
                Some(secondary) => Self::compare_spec(a, b, secondary),
                None => Ordering::Equal,
            })
            .then_with(|| a.id.cmp(&b.id))
    }

    fn compare_spec(a: &Product, b: &Product, spec: &SortSpec) -> Ordering {
        let ordering = Self::compare_field(a, b, spec.field);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Ordering rules:
    /// - names compare ordinally
    /// - missing category names sort before present ones
    /// - missing discounts compare as zero
    fn compare_field(a: &Product, b: &Product, field: SortField) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.cmp(&b.price),
            SortField::Stock => a.stock.cmp(&b.stock),
            SortField::CategoryName => a.category_name.as_deref().cmp(&b.category_name.as_deref()),
            SortField::Discount => a.discount_or_zero().cmp(&b.discount_or_zero()),
        }
    }
}
