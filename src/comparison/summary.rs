//! Comparison summary statistics

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Aggregates over a resolved product list.
///
/// Extreme-valued products are the first in input order to reach the
/// extreme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub highest_price: Decimal,
    pub lowest_price: Decimal,
    pub average_price: Decimal,
    pub price_difference: Decimal,
    pub highest_stock: u32,
    pub lowest_stock: u32,
    pub average_stock: f64,
    pub stock_difference: u32,
    pub most_expensive: Product,
    pub cheapest: Product,
    pub highest_stock_product: Product,
    pub lowest_stock_product: Product,
    /// Category names carried by more than one product, in first-seen order
    pub common_categories: Vec<String>,
    pub total_products_compared: usize,
}

impl ComparisonSummary {
    /// Computes the summary. Returns `None` for an empty list.
    pub fn compute(products: &[Product]) -> Option<Self> {
        let first = products.first()?;

        let mut most_expensive = first;
        let mut cheapest = first;
        let mut highest_stock = first;
        let mut lowest_stock = first;
        let mut stock_total: u64 = 0;

        for product in products {
            if product.price > most_expensive.price {
                most_expensive = product;
            }
            if product.price < cheapest.price {
                cheapest = product;
            }
            if product.stock > highest_stock.stock {
                highest_stock = product;
            }
            if product.stock < lowest_stock.stock {
                lowest_stock = product;
            }
            stock_total += u64::from(product.stock);
        }

        let count = products.len();

        Some(Self {
            highest_price: most_expensive.price,
            lowest_price: cheapest.price,
            average_price: average_price(products),
            price_difference: most_expensive.price - cheapest.price,
            highest_stock: highest_stock.stock,
            lowest_stock: lowest_stock.stock,
            average_stock: stock_total as f64 / count as f64,
            stock_difference: highest_stock.stock - lowest_stock.stock,
            most_expensive: most_expensive.clone(),
            cheapest: cheapest.clone(),
            highest_stock_product: highest_stock.clone(),
            lowest_stock_product: lowest_stock.clone(),
            common_categories: common_categories(products),
            total_products_compared: count,
        })
    }
}

/// Mean price. Falls back to summing per-item shares when the plain sum
/// would exceed `Decimal::MAX`.
fn average_price(products: &[Product]) -> Decimal {
    let count = Decimal::from(products.len());
    let total = products
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.price));

    match total {
        Some(total) => total / count,
        None => products
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.price / count)),
    }
}

/// Groups by category name and keeps the names seen more than once.
fn common_categories(products: &[Product]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for name in products.iter().filter_map(|p| p.category_name.as_deref()) {
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter(|name| counts[name] > 1)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: u64, price: i64, stock: u32) -> Product {
        Product::new(id, format!("P{}", id), Decimal::from(price), stock)
    }

    fn in_category(mut product: Product, name: &str) -> Product {
        product.category_name = Some(name.to_string());
        product
    }

    #[test]
    fn test_empty_has_no_summary() {
        assert!(ComparisonSummary::compute(&[]).is_none());
    }

    #[test]
    fn test_two_products() {
        let products = [
            Product::new(1, "A", Decimal::new(1000, 2), 4),
            Product::new(2, "B", Decimal::new(2000, 2), 8),
        ];
        let summary = ComparisonSummary::compute(&products).unwrap();

        assert_eq!(summary.price_difference, Decimal::new(1000, 2));
        assert_eq!(summary.highest_price, Decimal::new(2000, 2));
        assert_eq!(summary.lowest_price, Decimal::new(1000, 2));
        assert_eq!(summary.most_expensive.id, 2);
        assert_eq!(summary.cheapest.id, 1);
        assert_eq!(summary.stock_difference, 4);
        assert_eq!(summary.average_stock, 6.0);
        assert_eq!(summary.total_products_compared, 2);
    }

    #[test]
    fn test_average_price() {
        let products = [make(1, 10, 1), make(2, 20, 2), make(3, 15, 4)];
        let summary = ComparisonSummary::compute(&products).unwrap();

        assert_eq!(summary.average_price, Decimal::from(15));
        assert_eq!(summary.lowest_price, Decimal::from(10));
        assert_eq!(summary.highest_price, Decimal::from(20));
    }

    #[test]
    fn test_average_stock_not_rounded() {
        let products = [make(1, 1, 1), make(2, 1, 2)];
        let summary = ComparisonSummary::compute(&products).unwrap();
        assert_eq!(summary.average_stock, 1.5);
    }

    #[test]
    fn test_ties_pick_first_occurrence() {
        let products = [make(7, 50, 3), make(2, 50, 3), make(9, 50, 3)];
        let summary = ComparisonSummary::compute(&products).unwrap();

        assert_eq!(summary.most_expensive.id, 7);
        assert_eq!(summary.cheapest.id, 7);
        assert_eq!(summary.highest_stock_product.id, 7);
        assert_eq!(summary.lowest_stock_product.id, 7);
        assert_eq!(summary.price_difference, Decimal::ZERO);
    }

    #[test]
    fn test_common_categories() {
        let products = [
            in_category(make(1, 1, 1), "Tools"),
            in_category(make(2, 1, 1), "Garden"),
            make(3, 1, 1),
            in_category(make(4, 1, 1), "Tools"),
            make(5, 1, 1),
            in_category(make(6, 1, 1), "Garden"),
            in_category(make(7, 1, 1), "Paint"),
        ];
        let summary = ComparisonSummary::compute(&products).unwrap();
        assert_eq!(summary.common_categories, vec!["Tools", "Garden"]);
    }

    #[test]
    fn test_average_price_near_decimal_max() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let products = [
            Product::new(1, "A", huge, 1),
            Product::new(2, "B", huge, 2),
        ];
        let summary = ComparisonSummary::compute(&products).unwrap();

        assert_eq!(summary.average_price, huge);
        assert_eq!(summary.price_difference, Decimal::ZERO);
        assert_eq!(summary.highest_price, huge);
    }

    #[test]
    fn test_uncategorized_never_common() {
        let products = [make(1, 1, 1), make(2, 1, 1)];
        let summary = ComparisonSummary::compute(&products).unwrap();
        assert!(summary.common_categories.is_empty());
    }
}
