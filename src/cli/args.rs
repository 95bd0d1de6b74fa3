//! CLI argument definitions using clap
//!
//! Commands:
//! - stockquery search --config <path>
//! - stockquery compare --config <path>
//! - stockquery compare-category --category <id> [--limit <n>] --config <path>
//! - stockquery serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stockquery - deterministic product search and comparison
#[derive(Parser, Debug)]
#[command(name = "stockquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run one search read as JSON from stdin
    Search {
        /// Path to configuration file
        #[arg(long, default_value = "./stockquery.json")]
        config: PathBuf,
    },

    /// Compare the products listed in a JSON request on stdin
    Compare {
        /// Path to configuration file
        #[arg(long, default_value = "./stockquery.json")]
        config: PathBuf,
    },

    /// Compare the first products of one category
    CompareCategory {
        /// Path to configuration file
        #[arg(long, default_value = "./stockquery.json")]
        config: PathBuf,

        /// Category id
        #[arg(long)]
        category: i64,

        /// Number of products, clamped into [2, 10]
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Answer line-delimited JSON requests from stdin until EOF
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./stockquery.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["stockquery", "search"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Search {
                config: PathBuf::from("./stockquery.json")
            }
        );
    }

    #[test]
    fn test_compare_category_args() {
        let cli = Cli::try_parse_from([
            "stockquery",
            "compare-category",
            "--category",
            "3",
            "--limit",
            "15",
            "--config",
            "/etc/stockquery.json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::CompareCategory {
                config: PathBuf::from("/etc/stockquery.json"),
                category: 3,
                limit: Some(15),
            }
        );
    }

    #[test]
    fn test_category_required() {
        assert!(Cli::try_parse_from(["stockquery", "compare-category"]).is_err());
    }
}
