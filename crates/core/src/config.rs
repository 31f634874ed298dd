//! Analyzer configuration.

use std::path::PathBuf;

use crate::fetch::FetchConfig;
use crate::summary::DEFAULT_SENTENCES;

/// Configuration for [`PageAnalyzer`](crate::PageAnalyzer).
///
/// # Example
///
/// ```rust
/// use pagegrade_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .summary_sentences(4)
///     .target_word_count(800)
///     .timeout(5)
///     .build();
/// assert_eq!(config.fetch.timeout, 5);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Explicit topic model file; default lookup paths are used when unset.
    pub topic_model_path: Option<PathBuf>,

    /// Sentences in the summary (default: 6).
    pub summary_sentences: usize,

    /// Whether to fetch and summarize the source URL (default: true).
    pub summarize: bool,

    /// Word count for a full structure score (default: 1000).
    pub target_word_count: usize,

    /// Fewest images before the layout is penalized (default: 3).
    pub min_images: usize,

    /// HTTP settings for page and summary fetches.
    pub fetch: FetchConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            topic_model_path: None,
            summary_sentences: DEFAULT_SENTENCES,
            summarize: true,
            target_word_count: 1000,
            min_images: 3,
            fetch: FetchConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new builder for AnalyzerConfig.
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    pub fn topic_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.topic_model_path = Some(path.into());
        self
    }

    pub fn summary_sentences(mut self, value: usize) -> Self {
        self.config.summary_sentences = value;
        self
    }

    pub fn summarize(mut self, value: bool) -> Self {
        self.config.summarize = value;
        self
    }

    pub fn target_word_count(mut self, value: usize) -> Self {
        self.config.target_word_count = value;
        self
    }

    pub fn min_images(mut self, value: usize) -> Self {
        self.config.min_images = value;
        self
    }

    pub fn fetch(mut self, value: FetchConfig) -> Self {
        self.config.fetch = value;
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Builds the final configuration.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
