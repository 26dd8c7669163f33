//! Keyharvest: a keyword-combination search crawler
//!
//! This crate implements a crawler that enumerates sub-combinations of a base
//! keyword set, queries a search engine for each combination, extracts the
//! outbound result URLs, and visits each one to harvest its declared
//! meta-keywords. The accumulated results are aggregated into a JSON export
//! with summary statistics.

pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for keyharvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for keyharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, FetchError, QueryResult, VisitedUrls};
pub use output::{CrawlStatistics, ExportSnapshot};
