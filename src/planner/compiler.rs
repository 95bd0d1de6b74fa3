//! Filter compiler
//!
//! Validates a `SearchCriteria` and turns it into typed predicates plus an
//! order spec. Pure: no store access, no clamping.
//!
//! Validation rules (all evaluated, failures accumulated):
//! 1. page_number >= 1 and page_size >= 1
//! 2. min_price and max_price are non-negative
//! 3. min_price <= max_price when both present
//! 4. min_stock <= max_stock when both present
//! 5. min_discount_percentage within [0, 100]

use rust_decimal::Decimal;
use serde::Serialize;

use super::ast::{OrderSpec, Predicate, SortDirection, SortField, SortSpec, TextMatch, TextTarget};
use super::criteria::SearchCriteria;
use super::errors::{CompileResult, ValidationError, ValidationErrorCode, Violation};

/// Validated, normalized search ready for execution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    pub predicates: Vec<Predicate>,
    pub order: OrderSpec,
    pub page_number: u32,
    pub page_size: u32,
}

impl CompiledQuery {
    /// Predicate names joined by commas, for logs
    pub fn filter_names(&self) -> String {
        self.predicates
            .iter()
            .map(Predicate::op_name)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Records to skip before the requested page
    pub fn skip(&self) -> usize {
        (self.page_number as usize)
            .saturating_sub(1)
            .saturating_mul(self.page_size as usize)
    }

    /// Maximum records in the requested page
    pub fn take(&self) -> usize {
        self.page_size as usize
    }
}

/// Compiles search criteria into executable form
pub struct FilterCompiler;

impl FilterCompiler {
    /// Validates and normalizes the criteria.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every violated rule.
    pub fn compile(criteria: &SearchCriteria) -> CompileResult<CompiledQuery> {
        if let Some(err) = ValidationError::from_violations(Self::validate(criteria)) {
            return Err(err);
        }

        Ok(CompiledQuery {
            predicates: Self::predicates(criteria),
            order: Self::order(criteria),
            page_number: criteria.page_number,
            page_size: criteria.page_size,
        })
    }

    /// Checks every rule and returns all failures
    pub fn validate(criteria: &SearchCriteria) -> Vec<Violation> {
        let mut violations = Vec::new();

        if criteria.page_number < 1 {
            violations.push(Violation::new(
                ValidationErrorCode::StockInvalidPagination,
                "page_number",
                "Page number must be at least 1",
            ));
        }
        if criteria.page_size < 1 {
            violations.push(Violation::new(
                ValidationErrorCode::StockInvalidPagination,
                "page_size",
                "Page size must be at least 1",
            ));
        }

        if matches!(criteria.min_price, Some(p) if p < Decimal::ZERO) {
            violations.push(Violation::new(
                ValidationErrorCode::StockNegativePriceBound,
                "min_price",
                "Minimum price must be greater than or equal to 0",
            ));
        }
        if matches!(criteria.max_price, Some(p) if p < Decimal::ZERO) {
            violations.push(Violation::new(
                ValidationErrorCode::StockNegativePriceBound,
                "max_price",
                "Maximum price must be greater than or equal to 0",
            ));
        }

        if let (Some(min), Some(max)) = (criteria.min_price, criteria.max_price) {
            if min > max {
                violations.push(Violation::new(
                    ValidationErrorCode::StockInvalidPriceRange,
                    "min_price",
                    "Minimum price must be less than or equal to maximum price",
                ));
            }
        }

        if let (Some(min), Some(max)) = (criteria.min_stock, criteria.max_stock) {
            if min > max {
                violations.push(Violation::new(
                    ValidationErrorCode::StockInvalidStockRange,
                    "min_stock",
                    "Minimum stock must be less than or equal to maximum stock",
                ));
            }
        }

        if let Some(discount) = criteria.min_discount_percentage {
            if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
                violations.push(Violation::new(
                    ValidationErrorCode::StockInvalidDiscount,
                    "min_discount_percentage",
                    "Discount percentage must be between 0 and 100",
                ));
            }
        }

        violations
    }

    fn predicates(criteria: &SearchCriteria) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        let text = |needle: &str| TextMatch::new(needle, criteria.exact_match, criteria.case_sensitive);

        if let Some(term) = non_empty(&criteria.search_term) {
            predicates.push(Predicate::Text {
                target: TextTarget::NameOrDescription,
                matcher: text(term),
            });
        }
        if let Some(name) = non_empty(&criteria.name) {
            predicates.push(Predicate::Text {
                target: TextTarget::Name,
                matcher: text(name),
            });
        }
        if let Some(description) = non_empty(&criteria.description) {
            predicates.push(Predicate::Text {
                target: TextTarget::Description,
                matcher: text(description),
            });
        }

        if let Some(category_id) = criteria.category_id {
            predicates.push(Predicate::CategoryEq { category_id });
        }
        if let Some(ids) = criteria.category_ids.as_ref().filter(|ids| !ids.is_empty()) {
            predicates.push(Predicate::CategoryIn {
                category_ids: ids.clone(),
            });
        }
        if !criteria.include_without_category {
            predicates.push(Predicate::Categorized);
        }

        if let Some(bound) = criteria.min_price {
            predicates.push(Predicate::PriceGte { bound });
        }
        if let Some(bound) = criteria.max_price {
            predicates.push(Predicate::PriceLte { bound });
        }
        if let Some(bound) = criteria.min_stock {
            predicates.push(Predicate::StockGte { bound });
        }
        if let Some(bound) = criteria.max_stock {
            predicates.push(Predicate::StockLte { bound });
        }

        if criteria.is_low_stock == Some(true) {
            predicates.push(Predicate::LowStock);
        }
        if let Some(active) = criteria.has_promotion {
            predicates.push(Predicate::Promotion { active });
        }
        if let Some(threshold) = criteria.min_discount_percentage {
            predicates.push(Predicate::MinDiscount { threshold });
        }

        predicates
    }

    /// Builds the ordering.
    ///
    /// Unrecognized field names sort by id ascending. The secondary sort is
    /// only considered when a primary sort was requested.
    fn order(criteria: &SearchCriteria) -> OrderSpec {
        let Some(sort_by) = non_empty(&criteria.sort_by) else {
            return OrderSpec::default();
        };

        let primary = Self::sort_spec(sort_by, criteria.sort_direction.as_deref());
        let order = OrderSpec::new(primary);

        match non_empty(&criteria.secondary_sort_by) {
            Some(secondary_by) if secondary_by != sort_by => order.then_by(Self::sort_spec(
                secondary_by,
                criteria.secondary_sort_direction.as_deref(),
            )),
            _ => order,
        }
    }

    fn sort_spec(field: &str, direction: Option<&str>) -> SortSpec {
        match SortField::parse(field) {
            Some(field) => SortSpec::new(field, SortDirection::parse(direction)),
            None => SortSpec::asc(SortField::Id),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
