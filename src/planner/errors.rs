//! Filter compiler error types
//!
//! Error codes:
//! - STOCK_INVALID_PAGINATION (REJECT)
//! - STOCK_INVALID_PRICE_RANGE (REJECT)
//! - STOCK_INVALID_STOCK_RANGE (REJECT)
//! - STOCK_INVALID_DISCOUNT (REJECT)
//! - STOCK_NEGATIVE_PRICE_BOUND (REJECT)
//!
//! Violations accumulate: one `ValidationError` lists every failed rule.

use std::fmt;

/// Severity levels for compiler errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Validation rule codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// page_number or page_size below 1
    StockInvalidPagination,
    /// min_price > max_price
    StockInvalidPriceRange,
    /// min_stock > max_stock
    StockInvalidStockRange,
    /// Discount threshold outside [0, 100]
    StockInvalidDiscount,
    /// Negative price bound
    StockNegativePriceBound,
}

impl ValidationErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::StockInvalidPagination => "STOCK_INVALID_PAGINATION",
            ValidationErrorCode::StockInvalidPriceRange => "STOCK_INVALID_PRICE_RANGE",
            ValidationErrorCode::StockInvalidStockRange => "STOCK_INVALID_STOCK_RANGE",
            ValidationErrorCode::StockInvalidDiscount => "STOCK_INVALID_DISCOUNT",
            ValidationErrorCode::StockNegativePriceBound => "STOCK_NEGATIVE_PRICE_BOUND",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    code: ValidationErrorCode,
    field: &'static str,
    message: String,
}

impl Violation {
    pub fn new(code: ValidationErrorCode, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }

    /// Request field the rule is about
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.field, self.message)
    }
}

/// Criteria rejected by the filter compiler. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wraps accumulated violations; `None` when there are none
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Code of the first violation, used as the headline code
    pub fn code(&self) -> ValidationErrorCode {
        self.violations[0].code
    }

    pub fn severity(&self) -> Severity {
        Severity::Reject
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }

    /// Joined message for single-line display
    pub fn message(&self) -> String {
        self.messages().join("; ")
    }

    pub fn has_code(&self, code: ValidationErrorCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity(),
            self.code().code(),
            self.message()
        )
    }
}

impl std::error::Error for ValidationError {}

/// Result type for compiler operations
pub type CompileResult<T> = Result<T, ValidationError>;
