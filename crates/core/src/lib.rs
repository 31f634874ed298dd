pub mod analyzer;
pub mod checks;
pub mod config;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod grammar;
pub mod metadata;
pub mod nlp;
pub mod parse;
pub mod placeholder;
pub mod preprocess;
pub mod report;
pub mod seasonal;
pub mod sentiment;
pub mod summary;
pub mod topic;

pub use analyzer::{AnalysisContext, PageAnalyzer, fetch_and_analyze};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};
pub use error::{PagegradeError, Result};
pub use fetch::FetchConfig;
pub use fetch::{fetch_file, fetch_stdin, fetch_url};
pub use formatters::{JsonConfig, TextConfig};
pub use formatters::{convert_to_json, convert_to_text, report_from_json};
pub use grammar::{GrammarIssue, GrammarReport, IssueKind};
pub use metadata::UNKNOWN_AUTHOR;
pub use nlp::{PhraseExtractor, PosTagger, RuleTagger, SentimentLexicon, VaderLexicon};
pub use parse::Document;
pub use preprocess::preprocess_html;
pub use report::{
    AnalysisReport, Categories, Category, Improvement, Metric, Priority, Recommendation, SeasonalData, Sentiment,
    SentimentLabel, SocialLink,
};
pub use summary::{summarize_html, summarize_url};
pub use topic::{DEFAULT_TOPIC, Topic, TopicMatch, TopicModel, classify};
