//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::Severity;

/// Observable events in the search and comparison engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Startup
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Catalog file loaded into memory
    CatalogLoaded,

    // Search
    /// Search returned a page
    SearchExecuted,
    /// Search criteria failed validation
    SearchRejected,

    // Comparison
    /// Comparison summary produced
    ComparisonComplete,
    /// Comparison request rejected on cardinality
    ComparisonRejected,

    // Failures
    /// Catalog store read failed
    StoreUnavailable,
    /// Request envelope could not be handled
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::SearchExecuted => "SEARCH_EXECUTED",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::ComparisonComplete => "COMPARISON_COMPLETE",
            Event::ComparisonRejected => "COMPARISON_REJECTED",
            Event::StoreUnavailable => "STORE_UNAVAILABLE",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Default severity for this event
    pub fn severity(&self) -> Severity {
        match self {
            Event::SearchRejected | Event::ComparisonRejected | Event::RequestFailed => {
                Severity::Warn
            }
            Event::StoreUnavailable => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
