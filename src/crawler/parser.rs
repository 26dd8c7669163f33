//! HTML extraction for search result pages and target pages
//!
//! Two extractors live here: one pulls outbound result URLs out of a search
//! results page, the other harvests declared meta-keywords from a visited
//! target page. Both degrade to an empty result on malformed or unexpected
//! markup; extraction never fails.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Hosts belonging to the search engine itself; links back to them are
/// navigation, not outbound results
const ENGINE_HOSTS: [&str; 2] = ["google.com", "googleusercontent.com"];

/// Prefix of redirect-wrapped result links
const REDIRECT_PREFIX: &str = "/url?q=";

/// Tracking parameters appended after the destination in redirect links
const TRACKING_DELIMITER: &str = "&sa=";

/// Selector passes run over a search results page, mirroring the known
/// result-block markup. Later passes re-find links from earlier ones; the
/// first-seen dedup keeps each URL once.
const RESULT_SELECTORS: [&str; 4] = [
    "a[href^=\"/url?q=\"]",
    "a[href^=\"http\"]",
    ".yuRUbf a",
    "h3 a",
];

/// Metadata fields that may carry keywords, in priority order. Sites vary
/// in capitalization, and some only declare a description.
const KEYWORD_SELECTORS: [&str; 4] = [
    "meta[name=\"keywords\"]",
    "meta[name=\"Keywords\"]",
    "meta[property=\"keywords\"]",
    "meta[name=\"description\"]",
];

/// Delimiters a keyword declaration may use between tokens
const KEYWORD_DELIMITERS: [char; 3] = [',', ';', '|'];

/// Extracts outbound result URLs from a search results page.
///
/// Candidates from every selector pass are unwrapped, validated, and
/// deduplicated preserving first-seen order. A URL is accepted only if it is
/// an absolute http(s) URL with a host outside the engine's own domains.
pub fn extract_result_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut urls = Vec::new();
    let mut seen = HashSet::new();

    for selector_str in RESULT_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        for element in document.select(&selector) {
            let href = match element.value().attr("href") {
                Some(h) => h,
                None => continue,
            };

            if let Some(candidate) = unwrap_result_href(href) {
                if is_valid_result_url(&candidate) && seen.insert(candidate.clone()) {
                    urls.push(candidate);
                }
            }
        }
    }

    urls
}

/// Unwraps a raw href into a candidate destination URL.
///
/// Redirect-wrapped hrefs carry the destination after `/url?q=`, with
/// tracking parameters appended after `&sa=`; when the delimiter is absent
/// the whole remainder is the destination. Plain absolute links pass
/// through; anything else is no candidate.
fn unwrap_result_href(href: &str) -> Option<String> {
    if let Some(rest) = href.strip_prefix(REDIRECT_PREFIX) {
        let destination = match rest.find(TRACKING_DELIMITER) {
            Some(pos) => &rest[..pos],
            None => rest,
        };
        return Some(destination.to_string());
    }

    if href.starts_with("http") {
        return Some(href.to_string());
    }

    None
}

/// Accepts only absolute http(s) URLs whose host is outside the engine's
/// own domains
fn is_valid_result_url(candidate: &str) -> bool {
    let url = match Url::parse(candidate) {
        Ok(u) => u,
        Err(_) => return false,
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return false;
    }

    match url.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            !ENGINE_HOSTS.iter().any(|engine| host.contains(engine))
        }
        None => false,
    }
}

/// Harvests raw keyword tokens declared in a target page's metadata.
///
/// Every matching field contributes, in document order within each selector
/// pass. Tokens are not deduplicated here; case-variant duplicates survive
/// until export-time aggregation. Pages without any keyword-bearing field
/// yield an empty sequence.
pub fn extract_meta_keywords(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut keywords = Vec::new();

    for selector_str in KEYWORD_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content") {
                split_keyword_content(content.trim(), &mut keywords);
            }
        }
    }

    keywords
}

/// Splits a metadata content string into trimmed tokens.
///
/// Content containing any delimiter character is split on the full
/// delimiter set; otherwise the whole content is one token. Tokens empty
/// after trimming are discarded.
fn split_keyword_content(content: &str, keywords: &mut Vec<String>) {
    if content.is_empty() {
        return;
    }

    let has_delimiter = content.chars().any(|c| KEYWORD_DELIMITERS.contains(&c));
    if has_delimiter {
        keywords.extend(
            content
                .split(|c: char| KEYWORD_DELIMITERS.contains(&c))
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        );
    } else {
        keywords.push(content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_wrapped_link() {
        let html = r#"<html><body><a href="/url?q=https://example.com/page&sa=U&ved=xyz">Result</a></body></html>"#;
        let urls = extract_result_urls(html);
        assert_eq!(urls, vec!["https://example.com/page"]);
    }

    #[test]
    fn test_redirect_link_without_tracking_delimiter() {
        let html = r#"<html><body><a href="/url?q=https://example.com/bare">Result</a></body></html>"#;
        let urls = extract_result_urls(html);
        assert_eq!(urls, vec!["https://example.com/bare"]);
    }

    #[test]
    fn test_direct_absolute_link() {
        let html = r#"<html><body><a href="https://other.org/article">Link</a></body></html>"#;
        let urls = extract_result_urls(html);
        assert_eq!(urls, vec!["https://other.org/article"]);
    }

    #[test]
    fn test_engine_hosts_filtered() {
        let html = r#"
            <html><body>
                <a href="https://www.google.com/preferences">Settings</a>
                <a href="https://lh3.googleusercontent.com/img">Image</a>
                <a href="https://example.com/keep">Keep</a>
            </body></html>
        "#;
        let urls = extract_result_urls(html);
        assert_eq!(urls, vec!["https://example.com/keep"]);
    }

    #[test]
    fn test_engine_host_never_returned_from_redirect() {
        let html = r#"<html><body><a href="/url?q=https://maps.google.com/place&sa=U">Maps</a></body></html>"#;
        assert!(extract_result_urls(html).is_empty());
    }

    #[test]
    fn test_dedup_across_passes_preserves_first_seen_order() {
        // The same destination appears redirect-wrapped, as a direct link,
        // and inside an h3 block
        let html = r#"
            <html><body>
                <a href="/url?q=https://example.com/one&sa=U">One</a>
                <a href="https://example.com/two">Two</a>
                <h3><a href="https://example.com/one">One again</a></h3>
            </body></html>
        "#;
        let urls = extract_result_urls(html);
        assert_eq!(
            urls,
            vec!["https://example.com/one", "https://example.com/two"]
        );
    }

    #[test]
    fn test_relative_and_invalid_candidates_rejected() {
        let html = r##"
            <html><body>
                <a href="/search?q=more">Pagination</a>
                <a href="#fragment">Anchor</a>
                <a href="ftp://example.com/file">Ftp</a>
            </body></html>
        "##;
        assert!(extract_result_urls(html).is_empty());
    }

    #[test]
    fn test_empty_page_yields_no_urls() {
        assert!(extract_result_urls("<html><body></body></html>").is_empty());
        assert!(extract_result_urls("not html at all").is_empty());
    }

    #[test]
    fn test_keywords_split_on_mixed_delimiters() {
        let html = r#"<html><head><meta name="keywords" content="a, b; c"></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keywords_comma_separated() {
        let html = r#"<html><head><meta name="keywords" content="rust, web crawler, async"></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["rust", "web crawler", "async"]);
    }

    #[test]
    fn test_keywords_pipe_separated() {
        let html = r#"<html><head><meta name="keywords" content="one|two|three"></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_undelimited_content_is_one_token() {
        let html = r#"<html><head><meta name="keywords" content="single keyword phrase"></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["single keyword phrase"]);
    }

    #[test]
    fn test_capitalized_keywords_field() {
        let html = r#"<html><head><meta name="Keywords" content="legacy, markup"></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["legacy", "markup"]);
    }

    #[test]
    fn test_description_fallback() {
        let html =
            r#"<html><head><meta name="description" content="About rust crawling"></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["About rust crawling"]);
    }

    #[test]
    fn test_no_metadata_yields_empty() {
        let html = r#"<html><head><title>Nothing here</title></head><body></body></html>"#;
        assert!(extract_meta_keywords(html).is_empty());
    }

    #[test]
    fn test_empty_tokens_discarded() {
        let html = r#"<html><head><meta name="keywords" content=" , rust,, crawler , "></head></html>"#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["rust", "crawler"]);
    }

    #[test]
    fn test_duplicates_and_case_variants_kept() {
        let html = r#"
            <html><head>
                <meta name="keywords" content="Rust, rust">
                <meta name="description" content="rust">
            </head></html>
        "#;
        let keywords = extract_meta_keywords(html);
        assert_eq!(keywords, vec!["Rust", "rust", "rust"]);
    }
}
