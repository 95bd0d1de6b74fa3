//! API request types
//!
//! Every request is one JSON object with an `op` field; the remaining
//! fields are the operation's payload at the top level, e.g.
//! `{"op":"search","min_price":50,"sort_by":"price"}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::ProductId;
use crate::comparison::ComparisonRequest;
use crate::planner::SearchCriteria;

use super::errors::{ApiError, ApiResult};

/// Compare the first products of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCompareRequest {
    pub category_id: i64,
    /// Clamped into [2, 10]; the handler default applies when absent
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Plain listing in id order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(default = "default_page_number")]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Products whose stock is below an explicit threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockRequest {
    pub threshold: u32,
}

/// Single product lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRequest {
    pub id: ProductId,
}

/// Unified request envelope
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Search(SearchCriteria),
    Compare(ComparisonRequest),
    CompareCategory(CategoryCompareRequest),
    List(ListRequest),
    LowStock(LowStockRequest),
    Get(GetRequest),
}

/// Raw request for parsing
#[derive(Debug, Deserialize)]
struct RawRequest {
    op: String,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Request {
    /// Parse a request from JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        let raw: RawRequest = serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid JSON: {}", e)))?;
        let payload = Value::Object(raw.payload);

        match raw.op.as_str() {
            "search" => payload_of(payload).map(Request::Search),
            "compare" => payload_of(payload).map(Request::Compare),
            "compare_category" => payload_of(payload).map(Request::CompareCategory),
            "list" => payload_of(payload).map(Request::List),
            "low_stock" => payload_of(payload).map(Request::LowStock),
            "get" => payload_of(payload).map(Request::Get),
            other => Err(ApiError::unknown_operation(other)),
        }
    }
}

fn payload_of<T: serde::de::DeserializeOwned>(payload: Value) -> ApiResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::invalid_request(format!("Invalid payload: {}", e)))
}
