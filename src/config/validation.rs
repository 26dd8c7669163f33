use crate::config::types::{Config, FetcherConfig, OutputConfig, SearchConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    // Proper sub-combinations exist only for two or more keywords
    if config.base_keywords.len() < 2 {
        return Err(ConfigError::Validation(format!(
            "base_keywords must contain at least 2 keywords, got {}",
            config.base_keywords.len()
        )));
    }

    let mut seen = HashSet::new();
    for keyword in &config.base_keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "base_keywords must not contain empty keywords".to_string(),
            ));
        }

        if !seen.insert(keyword.as_str()) {
            return Err(ConfigError::Validation(format!(
                "base_keywords must be unique, '{}' appears more than once",
                keyword
            )));
        }
    }

    if config.join_char.is_empty() {
        return Err(ConfigError::Validation(
            "join_char cannot be empty".to_string(),
        ));
    }

    // The query URL must at least parse on its own; the query string is
    // appended verbatim at request time
    let url = Url::parse(&config.query_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid query_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "query_url must use http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.max_retries < 1 || config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be between 1 and 10, got {}",
            config.max_retries
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user_agents cannot be empty".to_string(),
        ));
    }

    for agent in &config.user_agents {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user_agents must not contain empty strings".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.export_path.is_empty() {
        return Err(ConfigError::Validation(
            "export_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
