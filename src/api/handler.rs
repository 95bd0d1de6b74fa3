//! API handler
//!
//! Dispatches parsed requests to the compiler, executor and comparison
//! engine. Holds no mutable state; every request is independent.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::{CatalogStore, Product, ProductId};
use crate::comparison::{
    ComparisonEngine, ComparisonError, ComparisonRequest, ProductComparison, MAX_COMPARE_ITEMS,
    MIN_COMPARE_ITEMS,
};
use crate::executor::{ExecutorError, PagedResult, QueryExecutor};
use crate::observability::{log_event_with_fields, Event};
use crate::planner::{FilterCompiler, SearchCriteria};

use super::errors::{ApiError, ApiResult};
use super::request::{CategoryCompareRequest, ListRequest, Request};
use super::response::Response;

/// Default `limit` for category comparison when the request omits it
pub const DEFAULT_CATEGORY_COMPARE_LIMIT: u32 = 5;

/// Clamps a category comparison limit into [2, 10]
pub fn clamp_comparison_limit(limit: u32) -> u32 {
    limit.clamp(MIN_COMPARE_ITEMS as u32, MAX_COMPARE_ITEMS as u32)
}

/// API handler over a catalog store
pub struct ApiHandler<S: CatalogStore> {
    store: S,
    category_compare_limit: u32,
}

impl<S: CatalogStore> ApiHandler<S> {
    /// Create a new API handler
    pub fn new(store: S) -> Self {
        Self {
            store,
            category_compare_limit: DEFAULT_CATEGORY_COMPARE_LIMIT,
        }
    }

    /// Overrides the default category comparison limit
    pub fn with_category_compare_limit(mut self, limit: u32) -> Self {
        self.category_compare_limit = limit;
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle a raw JSON request string
    pub fn handle(&self, json_request: &str) -> Response {
        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                log_event_with_fields(
                    Event::RequestFailed,
                    &[("code", e.code()), ("message", e.message())],
                );
                return Response::error(&e);
            }
        };

        match self.dispatch(request) {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    /// Runs a parsed request and encodes its result
    pub fn dispatch(&self, request: Request) -> ApiResult<Value> {
        match request {
            Request::Search(criteria) => encode(&self.search(&criteria)?),
            Request::Compare(req) => encode(&self.compare(&req)?),
            Request::CompareCategory(req) => encode(&self.compare_category(&req)?),
            Request::List(req) => encode(&self.list(&req)?),
            Request::LowStock(req) => encode(&self.low_stock(req.threshold)?),
            Request::Get(req) => encode(&self.get(req.id)?),
        }
    }

    /// Validates, compiles and executes a search
    ///
    /// Flow:
    /// 1. Compile criteria (all violations reported together)
    /// 2. Execute against the store
    pub fn search(&self, criteria: &SearchCriteria) -> ApiResult<PagedResult<Product>> {
        let query = FilterCompiler::compile(criteria).map_err(|e| {
            let violations = e.violations().len().to_string();
            log_event_with_fields(
                Event::SearchRejected,
                &[("code", e.code().code()), ("violations", &violations)],
            );
            ApiError::from(e)
        })?;

        let page = QueryExecutor::new(&self.store).execute(&query).map_err(|e| {
            log_event_with_fields(Event::StoreUnavailable, &[("message", e.message())]);
            ApiError::from(e)
        })?;

        log_event_with_fields(
            Event::SearchExecuted,
            &[
                ("filters", &query.filter_names()),
                ("order", &query.order.describe()),
                ("page_number", &page.page_number.to_string()),
                ("returned", &page.len().to_string()),
                ("total_records", &page.total_records.to_string()),
            ],
        );
        Ok(page)
    }

    /// Compares an explicit list of product ids
    pub fn compare(&self, request: &ComparisonRequest) -> ApiResult<ProductComparison> {
        let result = ComparisonEngine::new(&self.store)
            .compare(request)
            .map_err(log_comparison_failure)?;

        log_event_with_fields(
            Event::ComparisonComplete,
            &[
                ("requested", &request.product_ids.len().to_string()),
                (
                    "compared",
                    &result.summary.total_products_compared.to_string(),
                ),
            ],
        );
        Ok(result)
    }

    /// Compares the first products of a category.
    ///
    /// The limit is clamped into [2, 10] before it becomes a page size.
    pub fn compare_category(
        &self,
        request: &CategoryCompareRequest,
    ) -> ApiResult<ProductComparison> {
        let limit = clamp_comparison_limit(request.limit.unwrap_or(self.category_compare_limit));
        let criteria = SearchCriteria::page(1, limit).with_category(request.category_id);

        let page = self.search(&criteria)?;
        if page.len() < MIN_COMPARE_ITEMS {
            return Err(log_comparison_failure(ComparisonError::insufficient_resolved(
                page.len(),
            )));
        }

        let ids: Vec<ProductId> = page.iter().map(|p| p.id).collect();
        self.compare(&ComparisonRequest::new(ids))
    }

    /// Plain listing in id order
    pub fn list(&self, request: &ListRequest) -> ApiResult<PagedResult<Product>> {
        self.search(&SearchCriteria::page(request.page_number, request.page_size))
    }

    /// Products with stock strictly below `threshold`, in id order
    pub fn low_stock(&self, threshold: u32) -> ApiResult<Vec<Product>> {
        QueryExecutor::new(&self.store)
            .below_threshold(threshold)
            .map_err(|e| {
                log_event_with_fields(Event::StoreUnavailable, &[("message", e.message())]);
                ApiError::from(e)
            })
    }

    /// Single product by id
    pub fn get(&self, id: ProductId) -> ApiResult<Product> {
        let found = self.store.find_by_id(id).map_err(|e| {
            let e = ExecutorError::store_unavailable(e);
            log_event_with_fields(Event::StoreUnavailable, &[("message", e.message())]);
            ApiError::from(e)
        })?;
        found.ok_or_else(|| ApiError::product_not_found(id))
    }
}

fn log_comparison_failure(e: ComparisonError) -> ApiError {
    let event = if e.store_error().is_some() {
        Event::StoreUnavailable
    } else {
        Event::ComparisonRejected
    };
    log_event_with_fields(event, &[("code", e.code().code()), ("message", e.message())]);
    ApiError::from(e)
}

fn encode<T: Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(|e| ApiError::encoding_failed(e.to_string()))
}
