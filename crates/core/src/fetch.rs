//! Page retrieval from URLs, files, and stdin.
//!
//! URL fetching sends browser-like headers so that pages with basic anti-bot
//! checks still serve their markup. Any transport failure or non-success
//! status is reported as a fetch error.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::{PagegradeError, Result};

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 15,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Follows redirects, respects the configured timeout, and fails with
/// [`PagegradeError::HttpStatus`] when the server does not answer with 2xx.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| PagegradeError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(PagegradeError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(PagegradeError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", ACCEPT)
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                PagegradeError::Timeout { timeout: config.timeout }
            } else {
                PagegradeError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(PagegradeError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;
    tracing::debug!(bytes = content.len(), "page fetched");

    Ok(content)
}

/// Reads HTML content from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(PagegradeError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(PagegradeError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(PagegradeError::from)?;

    Ok(buffer)
}
