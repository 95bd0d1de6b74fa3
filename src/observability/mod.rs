//! Observability for the search and comparison engine
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use stockquery::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SearchExecuted, &[("total_records", "42")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
