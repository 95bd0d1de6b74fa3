//! CLI module
//!
//! Provides command-line interface for:
//! - search: one search request from stdin
//! - compare: one comparison request from stdin
//! - compare-category: category comparison from arguments
//! - serve: line-delimited requests until EOF

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    boot, compare, compare_category, run, run_command, search, serve, Config,
};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, read_requests, write_json, write_response};
