//! CLI command implementations
//!
//! Every command follows the same startup sequence:
//! 1. Load and validate the config file
//! 2. Apply the log level
//! 3. Load the catalog file
//! 4. Build the API handler
//!
//! Commands then read requests from stdin and write responses to stdout.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{clamp_comparison_limit, ApiHandler, DEFAULT_CATEGORY_COMPARE_LIMIT};
use crate::catalog::{CatalogLoader, MemoryCatalog};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, read_requests, write_response};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog JSON file (required). Relative paths resolve against the
    /// config file's directory.
    pub catalog_path: String,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Category comparison size when a request omits `limit` (default 5)
    #[serde(default = "default_category_compare_limit")]
    pub category_compare_limit: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_category_compare_limit() -> u32 {
    DEFAULT_CATEGORY_COMPARE_LIMIT
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.catalog_path.trim().is_empty() {
            return Err(CliError::config_error("catalog_path must not be empty"));
        }

        self.severity()?;

        if clamp_comparison_limit(self.category_compare_limit) != self.category_compare_limit {
            return Err(CliError::config_error(format!(
                "category_compare_limit must be between 2 and 10, got {}",
                self.category_compare_limit
            )));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    /// Catalog path, resolved against the directory holding the config file
    pub fn catalog_path_from(&self, config_path: &Path) -> PathBuf {
        let catalog = Path::new(&self.catalog_path);
        if catalog.is_absolute() {
            return catalog.to_path_buf();
        }
        match config_path.parent() {
            Some(dir) => dir.join(catalog),
            None => catalog.to_path_buf(),
        }
    }
}

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a specific command against the process stdin/stdout
pub fn run_command(cmd: Command) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match cmd {
        Command::Search { config } => search(&config, &mut input, &mut output),
        Command::Compare { config } => compare(&config, &mut input, &mut output),
        Command::CompareCategory {
            config,
            category,
            limit,
        } => compare_category(&config, category, limit, &mut output),
        Command::Serve { config } => serve(&config, input, &mut output),
    }
}

/// Loads config and catalog, returning a ready handler
pub fn boot(config_path: &Path) -> CliResult<ApiHandler<MemoryCatalog>> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let catalog_path = config.catalog_path_from(config_path);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("catalog_path", &catalog_path.display().to_string()),
            ("log_level", &config.log_level),
        ],
    );

    let handler = ApiHandler::new(CatalogLoader::load(&catalog_path)?)
        .with_category_compare_limit(config.category_compare_limit);
    log_event_with_fields(
        Event::CatalogLoaded,
        &[
            ("categories", &handler.store().category_count().to_string()),
            ("products", &handler.store().len().to_string()),
        ],
    );

    Ok(handler)
}

/// One search read from `input`
pub fn search<R: BufRead, W: Write>(
    config_path: &Path,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    one_shot(config_path, "search", input, output)
}

/// One comparison read from `input`
pub fn compare<R: BufRead, W: Write>(
    config_path: &Path,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    one_shot(config_path, "compare", input, output)
}

/// Category comparison from command-line arguments
pub fn compare_category<W: Write>(
    config_path: &Path,
    category: i64,
    limit: Option<u32>,
    output: &mut W,
) -> CliResult<()> {
    let handler = boot(config_path)?;
    let request = json!({
        "op": "compare_category",
        "category_id": category,
        "limit": limit,
    });
    write_response(output, &handler.handle(&request.to_string()))
}

/// Answers each non-blank input line until EOF
pub fn serve<R: BufRead, W: Write>(config_path: &Path, input: R, output: &mut W) -> CliResult<()> {
    let handler = boot(config_path)?;

    for line in read_requests(input) {
        let line = line?;
        write_response(output, &handler.handle(&line))?;
    }

    Ok(())
}

/// Reads one object, forces its `op`, and answers it
fn one_shot<R: BufRead, W: Write>(
    config_path: &Path,
    op: &str,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let handler = boot(config_path)?;

    let mut request = read_request(input)?;
    request.insert("op".to_string(), Value::String(op.to_string()));

    let response = handler.handle(&Value::Object(request).to_string());
    write_response(output, &response)
}
