//! Crawler module for the search-and-harvest pipeline
//!
//! This module contains the core crawling logic, including:
//! - Keyword combination generation
//! - HTTP fetching with retry, backoff, and pacing
//! - Search result and meta-keyword extraction
//! - Overall crawl coordination

mod combine;
mod coordinator;
mod fetcher;
mod parser;

pub use combine::generate_combinations;
pub use coordinator::{Coordinator, QueryResult, VisitedUrls};
pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use parser::{extract_meta_keywords, extract_result_urls};

use crate::config::Config;
use crate::output::ExportSnapshot;
use crate::HarvestError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Runs a complete crawl and returns its export snapshot.
///
/// Convenience wrapper for callers that do not need their own cancellation
/// handle.
pub async fn crawl(config: Config) -> Result<ExportSnapshot, HarvestError> {
    let cancel = Arc::new(AtomicBool::new(false));
    let coordinator = Coordinator::new(config, cancel)?;
    Ok(coordinator.run().await)
}
