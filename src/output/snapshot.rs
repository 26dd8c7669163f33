//! Export snapshot assembly
//!
//! The snapshot is the complete, serializable end-of-run structure. Its
//! field names and nesting are the wire contract for downstream consumers
//! and must not change.

use crate::config::Config;
use crate::crawler::{QueryResult, VisitedUrls};
use crate::output::stats::{compute_statistics, CrawlStatistics};
use chrono::Local;
use serde::Serialize;
use std::collections::HashSet;

/// The complete end-of-run result structure
#[derive(Debug, Clone, Serialize)]
pub struct ExportSnapshot {
    pub metadata: Metadata,
    pub search_results: SearchResults,
    pub extracted_data: ExtractedData,
}

/// Run metadata: when, with which keywords, and the summary numbers
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub date: String,
    pub base_keywords: Vec<String>,
    pub statistics: CrawlStatistics,
}

/// Per-query and global URL results
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    /// URL lists in combination-generation order, one entry per query
    pub urls_by_query: Vec<Vec<String>>,

    /// Every visited URL, in first-visit order
    pub all_unique_urls: Vec<String>,
}

/// Harvested keyword data
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedData {
    pub keywords: Vec<String>,
    pub keyword_count: usize,
}

/// Deduplicates keywords case-insensitively, keeping the casing of the
/// first occurrence and the original order
pub fn dedup_keywords(pool: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for keyword in pool {
        if seen.insert(keyword.to_lowercase()) {
            unique.push(keyword.clone());
        }
    }

    unique
}

/// Builds the exportable snapshot from the accumulated crawl state.
///
/// Read-only over its inputs; given identical inputs it produces identical
/// output apart from the date stamp.
pub fn build_snapshot(
    config: &Config,
    results: &[QueryResult],
    visited: &VisitedUrls,
    keyword_pool: &[String],
) -> ExportSnapshot {
    let statistics = compute_statistics(results, visited, keyword_pool);
    let keywords = dedup_keywords(keyword_pool);

    ExportSnapshot {
        metadata: Metadata {
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            base_keywords: config.search.base_keywords.clone(),
            statistics,
        },
        search_results: SearchResults {
            urls_by_query: results.iter().map(|r| r.urls.clone()).collect(),
            all_unique_urls: visited.as_slice().to_vec(),
        },
        extracted_data: ExtractedData {
            keyword_count: keywords.len(),
            keywords,
        },
    }
}
