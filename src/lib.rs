//! stockquery - deterministic product search and comparison
//!
//! Filter compilation, query execution and multi-product comparison over
//! an inventory catalog.

pub mod api;
pub mod catalog;
pub mod cli;
pub mod comparison;
pub mod executor;
pub mod observability;
pub mod planner;
