//! Predicate filtering for query execution
//!
//! Evaluates compiled predicates against products. All predicates combine
//! with AND; an empty predicate list matches everything.

use crate::catalog::Product;
use crate::planner::{Predicate, TextTarget};

/// Evaluates predicates against products
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a product matches all predicates
    pub fn matches(product: &Product, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(product, pred))
    }

    /// Checks if a product matches a single predicate
    pub fn matches_predicate(product: &Product, predicate: &Predicate) -> bool {
        match predicate {
            Predicate::Text { target, matcher } => match target {
                TextTarget::NameOrDescription => {
                    matcher.matches(&product.name) || matcher.matches(&product.description)
                }
                TextTarget::Name => matcher.matches(&product.name),
                TextTarget::Description => matcher.matches(&product.description),
            },
            Predicate::CategoryEq { category_id } => product.category_id == Some(*category_id),
            Predicate::CategoryIn { category_ids } => product
                .category_id
                .is_some_and(|id| category_ids.contains(&id)),
            Predicate::Categorized => product.is_categorized(),
            Predicate::PriceGte { bound } => product.price >= *bound,
            Predicate::PriceLte { bound } => product.price <= *bound,
            Predicate::StockGte { bound } => product.stock >= *bound,
            Predicate::StockLte { bound } => product.stock <= *bound,
            Predicate::LowStock => product.is_low_stock(),
            Predicate::Promotion { active } => product.has_promotion() == *active,
            Predicate::MinDiscount { threshold } => product
                .discount_percentage
                .is_some_and(|d| d >= *threshold),
        }
    }
}
