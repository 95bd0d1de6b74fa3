//! API layer
//!
//! Parses `{"op": ...}` request envelopes, dispatches them to the search
//! and comparison engines, and formats responses.
//!
//! # Design Principles
//!
//! - Stateless: every request is independent
//! - Error codes passed through unchanged
//! - Validation failures list every violated rule
//!
//! # Supported Operations
//!
//! - search
//! - compare
//! - compare_category
//! - list
//! - low_stock
//! - get

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiErrorCode, ApiResult, Severity};
pub use handler::{clamp_comparison_limit, ApiHandler, DEFAULT_CATEGORY_COMPARE_LIMIT};
pub use request::{CategoryCompareRequest, GetRequest, ListRequest, LowStockRequest, Request};
pub use response::{ErrorResponse, Response, SuccessResponse};
