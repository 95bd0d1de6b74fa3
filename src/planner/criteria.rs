//! Raw search request as supplied by callers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

/// Declarative search, filter and sort parameters.
///
/// Every filter is optional; present filters combine with AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Free text matched against name OR description
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_ids: Option<Vec<i64>>,

    #[serde(default)]
    pub min_price: Option<Decimal>,
    #[serde(default)]
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub min_stock: Option<u32>,
    #[serde(default)]
    pub max_stock: Option<u32>,

    #[serde(default)]
    pub is_low_stock: Option<bool>,
    #[serde(default)]
    pub has_promotion: Option<bool>,
    #[serde(default)]
    pub min_discount_percentage: Option<Decimal>,

    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<String>,
    #[serde(default)]
    pub secondary_sort_by: Option<String>,
    #[serde(default)]
    pub secondary_sort_direction: Option<String>,

    #[serde(default = "default_true")]
    pub include_without_category: bool,
    #[serde(default)]
    pub exact_match: bool,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            search_term: None,
            name: None,
            description: None,
            category_id: None,
            category_ids: None,
            min_price: None,
            max_price: None,
            min_stock: None,
            max_stock: None,
            is_low_stock: None,
            has_promotion: None,
            min_discount_percentage: None,
            sort_by: None,
            sort_direction: None,
            secondary_sort_by: None,
            secondary_sort_direction: None,
            include_without_category: true,
            exact_match: false,
            case_sensitive: false,
        }
    }
}

impl SearchCriteria {
    /// Criteria for one page with no filters
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            ..Self::default()
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_price_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_stock_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_stock = min;
        self.max_stock = max;
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self.sort_direction = Some(direction.into());
        self
    }

    pub fn with_secondary_sort(
        mut self,
        field: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        self.secondary_sort_by = Some(field.into());
        self.secondary_sort_direction = Some(direction.into());
        self
    }
}
