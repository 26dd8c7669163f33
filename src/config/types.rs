use serde::Deserialize;

/// Main configuration structure for keyharvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    pub output: OutputConfig,
}

/// Search query generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Base keywords to build query combinations from (at least two)
    #[serde(rename = "base-keywords")]
    pub base_keywords: Vec<String>,

    /// Character joining keywords inside one query string
    #[serde(rename = "join-char", default = "default_join_char")]
    pub join_char: String,

    /// Search engine URL prefix the query string is appended to
    #[serde(rename = "query-url", default = "default_query_url")]
    pub query_url: String,
}

/// HTTP fetching behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Pause after every successful request (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Number of attempts before a URL is given up on
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pool of user-agent strings, one chosen at random per attempt
    #[serde(rename = "user-agents", default = "default_user_agents")]
    pub user_agents: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the JSON export is written to
    #[serde(rename = "export-path", default = "default_export_path")]
    pub export_path: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            user_agents: default_user_agents(),
        }
    }
}

fn default_join_char() -> String {
    "+".to_string()
}

fn default_query_url() -> String {
    "https://www.google.com/search?q=".to_string()
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_export_path() -> String {
    "harvest-results.json".to_string()
}

/// Desktop browser identities used when the config supplies no pool
fn default_user_agents() -> Vec<String> {
    [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
