//! Compiled search structures
//!
//! Typed predicates and ordering produced by the filter compiler and consumed
//! by the executor. Nothing here is stringly typed.

use rust_decimal::Decimal;
use serde::Serialize;

/// Which text columns a text predicate inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTarget {
    /// Matches when either name or description matches
    NameOrDescription,
    Name,
    Description,
}

/// Substring or whole-value text comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextMatch {
    /// Needle, already lower-cased when `case_sensitive` is false
    pub needle: String,
    pub exact: bool,
    pub case_sensitive: bool,
}

impl TextMatch {
    pub fn new(needle: &str, exact: bool, case_sensitive: bool) -> Self {
        let needle = if case_sensitive {
            needle.to_string()
        } else {
            needle.to_lowercase()
        };
        Self {
            needle,
            exact,
            case_sensitive,
        }
    }

    /// Tests a single haystack value
    pub fn matches(&self, haystack: &str) -> bool {
        if self.case_sensitive {
            self.compare(haystack)
        } else {
            self.compare(&haystack.to_lowercase())
        }
    }

    fn compare(&self, haystack: &str) -> bool {
        if self.exact {
            haystack == self.needle
        } else {
            haystack.contains(&self.needle)
        }
    }
}

/// A single conjunctive filter condition over one product field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    Text { target: TextTarget, matcher: TextMatch },
    CategoryEq { category_id: i64 },
    CategoryIn { category_ids: Vec<i64> },
    /// Excludes products without a category (absent or id <= 0)
    Categorized,
    PriceGte { bound: Decimal },
    PriceLte { bound: Decimal },
    StockGte { bound: u32 },
    StockLte { bound: u32 },
    /// Stock below the product's own minimum level
    LowStock,
    /// `true`: discount present and > 0; `false`: no discount or zero
    Promotion { active: bool },
    /// Discount present and >= threshold
    MinDiscount { threshold: Decimal },
}

impl Predicate {
    /// Returns the operation name for logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Predicate::Text { .. } => "text",
            Predicate::CategoryEq { .. } => "category_eq",
            Predicate::CategoryIn { .. } => "category_in",
            Predicate::Categorized => "categorized",
            Predicate::PriceGte { .. } => "price_gte",
            Predicate::PriceLte { .. } => "price_lte",
            Predicate::StockGte { .. } => "stock_gte",
            Predicate::StockLte { .. } => "stock_lte",
            Predicate::LowStock => "low_stock",
            Predicate::Promotion { .. } => "promotion",
            Predicate::MinDiscount { .. } => "min_discount",
        }
    }
}

/// Sortable product fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    Price,
    Stock,
    CategoryName,
    Discount,
}

impl SortField {
    /// Parses a requested field name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; callers fall back to id.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "price" => Some(SortField::Price),
            "stock" => Some(SortField::Stock),
            "category" | "category_name" | "category-name" | "categoryname" => {
                Some(SortField::CategoryName)
            }
            "discount" => Some(SortField::Discount),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Stock => "stock",
            SortField::CategoryName => "category_name",
            SortField::Discount => "discount",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"desc"` in any case is descending; everything else is ascending.
    pub fn parse(direction: Option<&str>) -> Self {
        match direction {
            Some(d) if d.trim().eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Primary ordering plus optional tie-break.
///
/// Any remaining ties are broken by id ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSpec {
    pub primary: SortSpec,
    pub secondary: Option<SortSpec>,
}

impl OrderSpec {
    pub fn new(primary: SortSpec) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Adds a tie-break unless it sorts the same field as the primary
    pub fn then_by(mut self, secondary: SortSpec) -> Self {
        if secondary.field != self.primary.field {
            self.secondary = Some(secondary);
        }
        self
    }

    /// Compact form for logs, e.g. `price desc,stock asc`
    pub fn describe(&self) -> String {
        std::iter::once(&self.primary)
            .chain(self.secondary.as_ref())
            .map(|s| format!("{} {}", s.field.as_str(), s.direction.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for OrderSpec {
    fn default() -> Self {
        Self::new(SortSpec::asc(SortField::Id))
    }
}
