//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building an HTTP client shared across the run
//! - Per-attempt user-agent rotation
//! - Retry logic with exponential backoff for transient failures
//! - Request pacing after successful fetches

use crate::config::FetcherConfig;
use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Terminal fetch failure
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt failed; the caller records "no result" and moves on
    #[error("retries exhausted for {url} after {attempts} attempts")]
    Exhausted { url: String, attempts: u32 },
}

/// Performs paced, retrying HTTP GET requests for the crawl.
///
/// One fetcher is built per run and holds the shared client plus the
/// retry/pacing settings from the configuration.
pub struct Fetcher {
    client: Client,
    user_agents: Vec<String>,
    max_retries: u32,
    request_delay: Duration,
}

/// Builds the HTTP client used for every request in a run
pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

impl Fetcher {
    /// Creates a fetcher from the fetcher section of the configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config.timeout_secs)?,
            user_agents: config.user_agents.clone(),
            max_retries: config.max_retries,
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    /// Backoff before retry `attempt + 1`: `2^attempt` seconds.
    ///
    /// Uncapped and without jitter; a single caller issues one request at a
    /// time, so synchronized retries cannot pile up. The config caps
    /// `max_retries` at 10, bounding the largest delay.
    pub fn backoff_delay(attempt: u32) -> Duration {
        Duration::from_secs(1u64 << attempt)
    }

    /// Fetches `url`, retrying transient failures with exponential backoff.
    ///
    /// Each attempt sends a GET with a user agent chosen uniformly at random
    /// from the pool. A transport error or non-success status counts as one
    /// failed attempt and is always logged before the backoff sleep. After a
    /// successful fetch the configured pacing delay is awaited so the request
    /// rate stays polite, then the body is returned.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        for attempt in 0..self.max_retries {
            match self.try_fetch(url).await {
                Ok(body) => {
                    tokio::time::sleep(self.request_delay).await;
                    return Ok(body);
                }
                Err(reason) => {
                    tracing::warn!(
                        "Request failed for {} (attempt {}/{}): {}",
                        url,
                        attempt + 1,
                        self.max_retries,
                        reason
                    );
                    tokio::time::sleep(Self::backoff_delay(attempt)).await;
                }
            }
        }

        Err(FetchError::Exhausted {
            url: url.to_string(),
            attempts: self.max_retries,
        })
    }

    /// Issues a single GET attempt, mapping any failure to a description
    async fn try_fetch(&self, url: &str) -> Result<String, String> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.random_user_agent())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        response.text().await.map_err(|e| e.to_string())
    }

    /// Picks a client identity uniformly at random for one attempt
    fn random_user_agent(&self) -> &str {
        // The pool is validated non-empty at config load
        match self.user_agents.choose(&mut rand::thread_rng()) {
            Some(agent) => agent.as_str(),
            None => "",
        }
    }
}
