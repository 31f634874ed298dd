//! Error types for pagegrade operations.
//!
//! This module defines the main error type [`PagegradeError`]. Fetch failures
//! are kept distinguishable from configuration and parsing failures so callers
//! never attempt an analysis on a page that could not be retrieved.
//!
//! # Example
//!
//! ```rust
//! use pagegrade_core::{PagegradeError, Result};
//!
//! fn require_html(html: &str) -> Result<&str> {
//!     if html.trim().is_empty() {
//!         return Err(PagegradeError::HtmlParseError("empty document".to_string()));
//!     }
//!     Ok(html)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for page fetching and analysis.
///
/// The analysis itself never fails: every variant here comes from input
/// acquisition (network, files), configuration (topic models), or output
/// serialization.
#[derive(Error, Debug)]
pub enum PagegradeError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures, connection issues, and TLS problems.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP request returned status {status}")]
    HttpStatus { status: u16 },

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A topic model file exists but could not be decoded.
    ///
    /// A missing file is not an error; the classifier falls back to an empty model.
    #[error("Topic model error: {0}")]
    TopicModelError(String),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl PagegradeError {
    /// Returns true when the error came from retrieving the page over the network.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            PagegradeError::HttpError(_)
                | PagegradeError::HttpStatus { .. }
                | PagegradeError::Timeout { .. }
                | PagegradeError::InvalidUrl(_)
        )
    }
}

impl From<serde_json::Error> for PagegradeError {
    fn from(err: serde_json::Error) -> Self {
        PagegradeError::SerializationError(err.to_string())
    }
}

/// Result type alias for PagegradeError.
pub type Result<T> = std::result::Result<T, PagegradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PagegradeError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_status_error() {
        let err = PagegradeError::HttpStatus { status: 403 };
        assert!(err.to_string().contains("403"));
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_timeout_error() {
        let err = PagegradeError::Timeout { timeout: 15 };
        assert!(err.to_string().contains("15"));
        assert!(err.is_fetch_error());
    }

    #[test]
    fn test_topic_model_error_is_not_fetch_error() {
        let err = PagegradeError::TopicModelError("bad json".to_string());
        assert!(!err.is_fetch_error());
        assert!(err.to_string().contains("bad json"));
    }
}
