//! Statistics over the accumulated crawl state
//!
//! This module derives the summary numbers embedded in the export and
//! provides a human-readable end-of-run report.

use crate::crawler::{QueryResult, VisitedUrls};
use serde::Serialize;
use std::collections::HashSet;

/// Summary statistics derived from one crawl run
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStatistics {
    /// Number of search queries issued (failed fetches count too)
    pub total_search_queries: usize,

    /// URLs extracted across all queries, duplicates counted per occurrence
    pub total_urls_found: usize,

    /// Distinct URLs visited for keyword extraction
    pub unique_urls_scraped: usize,

    /// Raw keyword tokens harvested, before deduplication
    pub total_keywords_extracted: usize,

    /// Distinct keywords under case-insensitive comparison
    pub unique_keywords: usize,
}

/// Computes statistics from the coordinator's accumulated state.
///
/// Pure and deterministic. A URL found under two different queries counts
/// twice in `total_urls_found` but once in `unique_urls_scraped`.
pub fn compute_statistics(
    results: &[QueryResult],
    visited: &VisitedUrls,
    keyword_pool: &[String],
) -> CrawlStatistics {
    let unique_keywords = keyword_pool
        .iter()
        .map(|k| k.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    CrawlStatistics {
        total_search_queries: results.len(),
        total_urls_found: results.iter().map(|r| r.urls.len()).sum(),
        unique_urls_scraped: visited.len(),
        total_keywords_extracted: keyword_pool.len(),
        unique_keywords,
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("  Search queries issued: {}", stats.total_search_queries);
    println!("  URLs found (per occurrence): {}", stats.total_urls_found);
    println!("  Unique URLs visited: {}", stats.unique_urls_scraped);
    println!(
        "  Keyword tokens harvested: {}",
        stats.total_keywords_extracted
    );
    println!("  Unique keywords: {}", stats.unique_keywords);

    let hit_rate = if stats.total_search_queries > 0 {
        stats.total_urls_found as f64 / stats.total_search_queries as f64
    } else {
        0.0
    };
    println!("\n  Average URLs per query: {:.1}", hit_rate);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_result(query: &str, urls: &[&str]) -> QueryResult {
        QueryResult {
            query: query.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    #[test]
    fn test_statistics_over_empty_run() {
        let stats = compute_statistics(&[], &VisitedUrls::default(), &[]);

        assert_eq!(stats.total_search_queries, 0);
        assert_eq!(stats.total_urls_found, 0);
        assert_eq!(stats.unique_urls_scraped, 0);
        assert_eq!(stats.total_keywords_extracted, 0);
        assert_eq!(stats.unique_keywords, 0);
    }

    #[test]
    fn test_urls_counted_per_occurrence() {
        // The same URL under two queries counts twice in total_urls_found
        // but was only visited once
        let results = vec![
            query_result("a", &["https://example.com/x", "https://example.com/y"]),
            query_result("b", &["https://example.com/x"]),
        ];
        let mut visited = VisitedUrls::default();
        visited.insert("https://example.com/x");
        visited.insert("https://example.com/y");

        let stats = compute_statistics(&results, &visited, &[]);

        assert_eq!(stats.total_search_queries, 2);
        assert_eq!(stats.total_urls_found, 3);
        assert_eq!(stats.unique_urls_scraped, 2);
    }

    #[test]
    fn test_unique_keywords_case_folded() {
        let pool: Vec<String> = ["Go", "go", "GO", "rust"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let stats = compute_statistics(&[], &VisitedUrls::default(), &pool);

        assert_eq!(stats.total_keywords_extracted, 4);
        assert_eq!(stats.unique_keywords, 2);
    }

    #[test]
    fn test_failed_queries_still_counted() {
        let results = vec![query_result("a", &[]), query_result("b", &[])];
        let stats = compute_statistics(&results, &VisitedUrls::default(), &[]);

        assert_eq!(stats.total_search_queries, 2);
        assert_eq!(stats.total_urls_found, 0);
    }
}
