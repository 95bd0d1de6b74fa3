//! Filter compiler for product search
//!
//! Validates a raw `SearchCriteria` and compiles it into typed predicates and
//! an ordering before any store access.
//!
//! # Design Principles
//!
//! - Pure: same criteria, same compiled query
//! - Complete: every failed rule is reported, not just the first
//! - Explicit: no silent clamping or range correction
//! - Typed: sort fields are a closed enum, unknown names fall back to id

mod ast;
mod compiler;
mod criteria;
mod errors;

pub use ast::{OrderSpec, Predicate, SortDirection, SortField, SortSpec, TextMatch, TextTarget};
pub use compiler::{CompiledQuery, FilterCompiler};
pub use criteria::SearchCriteria;
pub use errors::{CompileResult, Severity, ValidationError, ValidationErrorCode, Violation};
