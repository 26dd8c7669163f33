//! Crawl coordinator - main crawl orchestration logic
//!
//! This module drives the pipeline: for each keyword combination, fetch the
//! search page, extract result URLs, then visit each not-yet-seen URL and
//! harvest its meta-keywords. The coordinator exclusively owns the visited
//! set, the keyword pool, and the per-query result history for the duration
//! of a run; the aggregator only reads them to build the export snapshot.

use crate::config::Config;
use crate::crawler::combine::generate_combinations;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::{extract_meta_keywords, extract_result_urls};
use crate::output::{build_snapshot, ExportSnapshot};
use crate::HarvestError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// URLs extracted from one search query's result page
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// The joined keyword combination that was searched for
    pub query: String,

    /// Result URLs in extraction order (may be empty)
    pub urls: Vec<String>,
}

/// Insertion-ordered set of URLs already fetched for keyword extraction.
///
/// Membership prevents re-fetching; insertion order keeps the exported URL
/// list stable across runs with identical inputs.
#[derive(Debug, Default)]
pub struct VisitedUrls {
    order: Vec<String>,
    index: HashSet<String>,
}

impl VisitedUrls {
    /// Inserts `url`, returning false if it was already present
    pub fn insert(&mut self, url: &str) -> bool {
        if self.index.contains(url) {
            return false;
        }

        self.index.insert(url.to_string());
        self.order.push(url.to_string());
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains(url)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visited URLs in insertion order
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

/// Drives the crawl pipeline and owns all accumulated state
pub struct Coordinator {
    config: Config,
    fetcher: Fetcher,
    cancel: Arc<AtomicBool>,
    results: Vec<QueryResult>,
    visited: VisitedUrls,
    keyword_pool: Vec<String>,
}

impl Coordinator {
    /// Creates a coordinator for one run.
    ///
    /// `cancel` is shared with whoever requests a graceful stop (typically
    /// the Ctrl-C handler); setting it stops new fetches promptly while
    /// keeping everything accumulated so far.
    pub fn new(config: Config, cancel: Arc<AtomicBool>) -> Result<Self, HarvestError> {
        let fetcher = Fetcher::new(&config.fetcher)?;

        Ok(Self {
            config,
            fetcher,
            cancel,
            results: Vec::new(),
            visited: VisitedUrls::default(),
            keyword_pool: Vec::new(),
        })
    }

    /// Runs the full crawl and returns the export snapshot.
    ///
    /// Cancellation is checked before each query and before each target
    /// visit; a cancelled run still produces a best-effort snapshot from
    /// whatever has accumulated.
    pub async fn run(mut self) -> ExportSnapshot {
        let queries = generate_combinations(
            &self.config.search.base_keywords,
            &self.config.search.join_char,
        );
        let total = queries.len();
        tracing::info!("Generated {} keyword combinations", total);

        for (i, query) in queries.into_iter().enumerate() {
            if self.cancelled() {
                tracing::info!(
                    "Cancellation requested, stopping after {} of {} queries",
                    self.results.len(),
                    total
                );
                break;
            }

            tracing::info!("Processing combination {}/{}: {}", i + 1, total, query);
            self.process_query(query).await;
        }

        self.into_snapshot()
    }

    fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Fetches one query's search page, records its URL list, and visits
    /// the targets.
    ///
    /// A terminal search fetch failure records an empty URL list for the
    /// query; it is not fatal to the run.
    async fn process_query(&mut self, query: String) {
        let search_url = format!("{}{}", self.config.search.query_url, query);

        let urls = match self.fetcher.fetch(&search_url).await {
            Ok(body) => extract_result_urls(&body),
            Err(e) => {
                tracing::warn!("Failed to fetch search results for '{}': {}", query, e);
                Vec::new()
            }
        };

        tracing::info!("Found {} URLs for query '{}'", urls.len(), query);

        self.results.push(QueryResult {
            query,
            urls: urls.clone(),
        });

        self.visit_targets(&urls).await;
    }

    /// Visits each result URL not seen before and harvests its keywords.
    ///
    /// The visited check-and-insert happens before the fetch, so a URL
    /// appearing under several queries is fetched at most once per run. A
    /// terminal fetch failure skips the URL; the fetcher has already logged
    /// its retries.
    async fn visit_targets(&mut self, urls: &[String]) {
        for url in urls {
            if self.cancelled() {
                return;
            }

            if !self.visited.insert(url) {
                continue;
            }

            tracing::info!("Extracting keywords from: {}", url);
            match self.fetcher.fetch(url).await {
                Ok(body) => {
                    let keywords = extract_meta_keywords(&body);
                    tracing::info!("Extracted {} keywords from {}", keywords.len(), url);
                    self.keyword_pool.extend(keywords);
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", url, e);
                }
            }
        }
    }

    fn into_snapshot(self) -> ExportSnapshot {
        build_snapshot(
            &self.config,
            &self.results,
            &self.visited,
            &self.keyword_pool,
        )
    }
}
