//! API error types
//!
//! API errors are pass-through: they keep the original code and message
//! from the planner, executor, and comparison subsystems. Validation
//! failures also carry every violated rule in `details`.

use std::fmt;

use crate::catalog::ProductId;
use crate::comparison::{self, ComparisonError};
use crate::executor::ExecutorError;
use crate::planner::ValidationError;

/// API error severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Caller must fix the request
    Reject,
    /// Request was fine, the engine could not serve it
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Request is not valid JSON or misses a required field
    StockInvalidRequest,
    /// `op` names no known operation
    StockUnknownOperation,
    /// `get` named an id with no product
    StockProductNotFound,
    /// Result could not be encoded as JSON
    StockEncodingFailed,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::StockInvalidRequest => "STOCK_INVALID_REQUEST",
            ApiErrorCode::StockUnknownOperation => "STOCK_UNKNOWN_OPERATION",
            ApiErrorCode::StockProductNotFound => "STOCK_PRODUCT_NOT_FOUND",
            ApiErrorCode::StockEncodingFailed => "STOCK_ENCODING_FAILED",
        }
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        match self {
            ApiErrorCode::StockEncodingFailed => Severity::Error,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error with preserved subsystem error information
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Original error code string (from subsystem or API)
    code: String,
    message: String,
    severity: Severity,
    /// One entry per violated rule; empty for non-validation errors
    details: Vec<String>,
}

impl ApiError {
    fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code().to_string(),
            message: message.into(),
            severity: code.severity(),
            details: Vec::new(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::StockInvalidRequest, reason)
    }

    /// Create an unknown operation error
    pub fn unknown_operation(op: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::StockUnknownOperation,
            format!("Unknown operation: {}", op.into()),
        )
    }

    /// Create a not found error for a single product lookup
    pub fn product_not_found(id: ProductId) -> Self {
        Self::new(
            ApiErrorCode::StockProductNotFound,
            format!("Product with ID {} not found", id),
        )
    }

    /// Create an encoding failure error
    pub fn encoding_failed(reason: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::StockEncodingFailed, reason)
    }

    /// Returns the error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the per-rule details
    pub fn details(&self) -> &[String] {
        &self.details
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message(),
            severity: Severity::Reject,
            details: err.messages(),
        }
    }
}

impl From<ExecutorError> for ApiError {
    fn from(err: ExecutorError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
            severity: Severity::Error,
            details: Vec::new(),
        }
    }
}

impl From<ComparisonError> for ApiError {
    fn from(err: ComparisonError) -> Self {
        let severity = match err.severity() {
            comparison::Severity::Reject => Severity::Reject,
            comparison::Severity::Error => Severity::Error,
        };
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
            severity,
            details: Vec::new(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
