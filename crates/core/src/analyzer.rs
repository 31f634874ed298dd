//! Page analysis API.
//!
//! [`PageAnalyzer`] turns raw HTML (and optionally its source URL) into an
//! [`AnalysisReport`]. The analysis itself is synchronous and infallible; only
//! the optional summary fetch is async, and its failures become fallback text.
//!
//! # Example
//!
//! ```rust
//! use pagegrade_core::{AnalysisContext, AnalyzerConfig, PageAnalyzer, TopicModel};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let analyzer = PageAnalyzer::new(AnalysisContext::new(TopicModel::default()), AnalyzerConfig::default());
//! let html = "<html><body><h1>Hello</h1><p>A short page.</p></body></html>";
//! let report = analyzer.analyze_document(html, String::new(), &mut StdRng::seed_from_u64(1));
//!
//! assert_eq!(report.topic, "Other");
//! assert!(report.overall_score <= 100);
//! ```

use rand::Rng;

use crate::checks::{content, seo, social, visual};
use crate::config::AnalyzerConfig;
use crate::fetch::fetch_url;
use crate::nlp::{PhraseExtractor, PosTagger, RuleTagger, SentimentLexicon, VaderLexicon};
use crate::parse::Document;
use crate::report::{AnalysisReport, Categories};
use crate::summary::{summarize_html, summarize_url};
use crate::topic::{self, TopicModel};
use crate::{Result, placeholder, seasonal, sentiment};

/// Read-only resources shared by every analysis.
///
/// Built once, then shared (it is `Send + Sync`) across any number of
/// concurrent analyses.
pub struct AnalysisContext {
    topics: TopicModel,
    tagger: Box<dyn PosTagger>,
    phrases: Box<dyn PhraseExtractor>,
    lexicon: Box<dyn SentimentLexicon>,
}

impl AnalysisContext {
    /// Creates a context around `topics` with the default language tools.
    pub fn new(topics: TopicModel) -> Self {
        Self {
            topics,
            tagger: Box::new(RuleTagger::new()),
            phrases: Box::new(RuleTagger::new()),
            lexicon: Box::new(VaderLexicon::new()),
        }
    }

    /// Loads the topic model named by `config`, or from the default locations.
    ///
    /// # Errors
    ///
    /// Returns [`PagegradeError::TopicModelError`](crate::PagegradeError::TopicModelError)
    /// if a model file exists but is malformed.
    pub fn load(config: &AnalyzerConfig) -> Result<Self> {
        let topics = TopicModel::load_default(config.topic_model_path.as_deref())?;
        Ok(Self::new(topics))
    }

    /// Replaces the part-of-speech tagger used for sentiment improvements.
    pub fn with_tagger(mut self, tagger: impl PosTagger + 'static) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    /// Replaces the noun-phrase extractor used for topic classification.
    pub fn with_phrase_extractor(mut self, phrases: impl PhraseExtractor + 'static) -> Self {
        self.phrases = Box::new(phrases);
        self
    }

    /// Replaces the sentiment lexicon.
    pub fn with_lexicon(mut self, lexicon: impl SentimentLexicon + 'static) -> Self {
        self.lexicon = Box::new(lexicon);
        self
    }

    /// The loaded topic model.
    pub fn topics(&self) -> &TopicModel {
        &self.topics
    }
}

/// Produces content-quality reports for web pages.
pub struct PageAnalyzer {
    context: AnalysisContext,
    config: AnalyzerConfig,
}

impl PageAnalyzer {
    pub fn new(context: AnalysisContext, config: AnalyzerConfig) -> Self {
        Self { context, config }
    }

    /// Creates an analyzer, loading its topic model as configured.
    pub fn from_config(config: AnalyzerConfig) -> Result<Self> {
        let context = AnalysisContext::load(&config)?;
        Ok(Self::new(context, config))
    }

    pub fn context(&self) -> &AnalysisContext {
        &self.context
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes `html`, summarizing `url` when it is non-empty.
    ///
    /// Placeholder metrics are drawn from the thread-local generator.
    pub async fn analyze(&self, html: &str, url: &str) -> AnalysisReport {
        let summary = self.summarize(url).await;
        self.analyze_document(html, summary, &mut rand::rng())
    }

    /// Like [`analyze`](Self::analyze), drawing placeholder metrics from `rng`.
    pub async fn analyze_with<R: Rng + ?Sized>(&self, html: &str, url: &str, rng: &mut R) -> AnalysisReport {
        let summary = self.summarize(url).await;
        self.analyze_document(html, summary, rng)
    }

    /// Fetches `url` and analyzes it, summarizing the fetched page.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the page cannot be retrieved; no analysis is
    /// attempted in that case.
    pub async fn fetch_and_analyze(&self, url: &str) -> Result<AnalysisReport> {
        let html = fetch_url(url, &self.config.fetch).await?;
        let summary = self.summarize_fetched(&html);
        Ok(self.analyze_document(&html, summary, &mut rand::rng()))
    }

    /// Like [`fetch_and_analyze`](Self::fetch_and_analyze), drawing placeholder
    /// metrics from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a fetch error if the page cannot be retrieved.
    pub async fn fetch_and_analyze_with<R: Rng + ?Sized>(&self, url: &str, rng: &mut R) -> Result<AnalysisReport> {
        let html = fetch_url(url, &self.config.fetch).await?;
        let summary = self.summarize_fetched(&html);
        Ok(self.analyze_document(&html, summary, rng))
    }

    fn summarize_fetched(&self, html: &str) -> String {
        if self.config.summarize { summarize_html(html, self.config.summary_sentences) } else { String::new() }
    }

    /// Summary for `url`, or an empty string when there is no URL or
    /// summaries are disabled.
    pub async fn summarize(&self, url: &str) -> String {
        if url.is_empty() || !self.config.summarize {
            return String::new();
        }
        summarize_url(url, self.config.summary_sentences, &self.config.fetch).await
    }

    /// Runs every check over `html` and assembles the report.
    ///
    /// `rng` supplies the placeholder metrics; pass a seeded generator for
    /// reproducible reports.
    pub fn analyze_document<R: Rng + ?Sized>(&self, html: &str, summary: String, rng: &mut R) -> AnalysisReport {
        let doc = Document::parse_stripped(html);
        let text = doc.text_content();
        tracing::debug!(chars = text.len(), "extracted page text");

        let topic = topic::classify(&text, &self.context.topics, self.context.phrases.as_ref());
        tracing::debug!(topic = %topic.topic, matches = topic.matched_keywords.len(), "topic classified");

        let sentiment = sentiment::analyze(&text, self.context.lexicon.as_ref(), self.context.tagger.as_ref());
        tracing::debug!(score = sentiment.score, "sentiment scored");

        let author = doc.extract_author();
        let social_links = doc.social_links();

        let seo = seo::check(&doc, &topic.topic, rng);
        let content = content::check(&text, &topic.topic, self.config.target_word_count, rng);
        let visual = visual::check(&doc, &topic.topic, self.config.min_images, rng);
        let mobile = visual.metric("Mobile Response");

        let mut recommendations = Vec::new();
        recommendations.extend(seo.issues);
        recommendations.extend(content.issues);
        recommendations.extend(visual.issues);
        recommendations.extend(social::recommendations(&social_links));

        let categories = Categories {
            discoverability: seo.category,
            content: content.category,
            visual: visual.category,
            ux: placeholder::ux(mobile, rng),
            engagement: placeholder::engagement(rng),
            topic_fit: placeholder::topic_fit(rng),
        };
        let overall_score = categories.overall();
        tracing::debug!(overall_score, recommendations = recommendations.len(), "page scored");

        AnalysisReport {
            overall_score,
            author,
            social_links,
            topic: topic.topic,
            matched_keywords: topic.matched_keywords,
            sentiment,
            categories,
            recommendations,
            seasonal_data: seasonal::detect(&text),
            summary,
        }
    }
}

/// Convenience function: fetch and analyze a URL with the default
/// configuration and topic model lookup.
///
/// # Example
///
/// ```no_run
/// use pagegrade_core::fetch_and_analyze;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let report = fetch_and_analyze("https://example.com/blog/post").await?;
///     println!("Overall: {}", report.overall_score);
///     Ok(())
/// }
/// ```
pub async fn fetch_and_analyze(url: &str) -> Result<AnalysisReport> {
    PageAnalyzer::from_config(AnalyzerConfig::default())?
        .fetch_and_analyze(url)
        .await
}
