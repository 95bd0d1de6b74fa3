//! Product and category records held by the catalog store

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier (unique, positive)
pub type ProductId = u64;

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A product record.
///
/// `price` is never negative and `stock` is unsigned. `category_name` is
/// filled in by the store when the product is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
    #[serde(default)]
    pub minimum_stock_level: u32,
}

impl Product {
    /// Creates an uncategorized product with no discount
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            stock,
            category_id: None,
            category_name: None,
            discount_percentage: None,
            minimum_stock_level: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_discount(mut self, percentage: Decimal) -> Self {
        self.discount_percentage = Some(percentage);
        self
    }

    pub fn with_minimum_stock_level(mut self, level: u32) -> Self {
        self.minimum_stock_level = level;
        self
    }

    /// True when the product references a real category (id > 0)
    pub fn is_categorized(&self) -> bool {
        matches!(self.category_id, Some(id) if id > 0)
    }

    /// Stock is below this product's own minimum level
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.minimum_stock_level
    }

    /// A discount is present and strictly positive
    pub fn has_promotion(&self) -> bool {
        matches!(self.discount_percentage, Some(d) if d > Decimal::ZERO)
    }

    /// Discount with absence treated as zero (used for ordering)
    pub fn discount_or_zero(&self) -> Decimal {
        self.discount_percentage.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorized() {
        let p = Product::new(1, "Hammer", Decimal::from(10), 5);
        assert!(!p.is_categorized());
        assert!(!p.clone().with_category(0).is_categorized());
        assert!(!p.clone().with_category(-1).is_categorized());
        assert!(p.with_category(3).is_categorized());
    }

    #[test]
    fn test_low_stock_uses_own_threshold() {
        let p = Product::new(1, "Nails", Decimal::from(2), 4).with_minimum_stock_level(5);
        assert!(p.is_low_stock());

        let p = Product::new(2, "Screws", Decimal::from(2), 5).with_minimum_stock_level(5);
        assert!(!p.is_low_stock());
    }

    #[test]
    fn test_promotion() {
        let p = Product::new(1, "Saw", Decimal::from(30), 1);
        assert!(!p.has_promotion());
        assert_eq!(p.discount_or_zero(), Decimal::ZERO);

        let p = p.with_discount(Decimal::ZERO);
        assert!(!p.has_promotion());

        let p = p.with_discount(Decimal::from(15));
        assert!(p.has_promotion());
        assert_eq!(p.discount_or_zero(), Decimal::from(15));
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Product = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Drill",
            "price": 99.5,
            "stock": 3
        }))
        .unwrap();

        assert_eq!(p.description, "");
        assert_eq!(p.category_id, None);
        assert_eq!(p.discount_percentage, None);
        assert_eq!(p.minimum_stock_level, 0);
        assert_eq!(p.price, Decimal::new(995, 1));
    }
}
