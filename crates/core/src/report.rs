//! The analysis report and its parts.
//!
//! Field names are the JSON contract consumed by report viewers, so every
//! type here derives `Serialize` and keeps its Rust field names on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound of every score in the report.
pub const MAX_SCORE: u32 = 100;

/// Integer-truncated mean; zero for an empty slice.
pub fn mean_score(values: &[u32]) -> u32 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().sum();
    sum / values.len() as u32
}

/// Complete content-quality report for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub author: String,
    pub social_links: Vec<SocialLink>,
    pub topic: String,
    pub matched_keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub categories: Categories,
    pub recommendations: Vec<Recommendation>,
    pub seasonal_data: SeasonalData,
    pub summary: String,
}

/// A link to one of the recognised social platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// A strongly negative word worth rephrasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub word: String,
    pub context: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Compound polarity in `[-1, 1]`.
    pub score: f64,
    pub label: SentimentLabel,
    pub improvements: Vec<Improvement>,
}

/// A named sub-score of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: u32,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self { name: name.into(), value: value.min(MAX_SCORE) }
    }
}

/// A category score and the metrics it averages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub score: u32,
    pub metrics: Vec<Metric>,
}

impl Category {
    /// Builds a category whose score is the truncated mean of its metrics.
    pub fn from_metrics(metrics: Vec<Metric>) -> Self {
        let values: Vec<u32> = metrics.iter().map(|m| m.value).collect();
        Self { score: mean_score(&values).min(MAX_SCORE), metrics }
    }

    /// Looks up a metric value by display name.
    pub fn metric(&self, name: &str) -> Option<u32> {
        self.metrics.iter().find(|m| m.name == name).map(|m| m.value)
    }
}

/// The six fixed report categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categories {
    pub discoverability: Category,
    pub content: Category,
    pub visual: Category,
    pub ux: Category,
    pub engagement: Category,
    pub topic_fit: Category,
}

impl Categories {
    /// Category scores in report order.
    pub fn scores(&self) -> [u32; 6] {
        [
            self.discoverability.score,
            self.content.score,
            self.visual.score,
            self.ux.score,
            self.engagement.score,
            self.topic_fit.score,
        ]
    }

    /// Truncated mean of all six category scores.
    pub fn overall(&self) -> u32 {
        mean_score(&self.scores())
    }

    /// `(key, category)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Category)> {
        [
            ("discoverability", &self.discoverability),
            ("content", &self.content),
            ("visual", &self.visual),
            ("ux", &self.ux),
            ("engagement", &self.engagement),
            ("topic_fit", &self.topic_fit),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// An actionable finding with a concrete fix suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub desc: String,
    pub ai_fix: String,
}

impl Recommendation {
    pub fn new(priority: Priority, title: impl Into<String>, desc: impl Into<String>, ai_fix: impl Into<String>) -> Self {
        Self { priority, title: title.into(), desc: desc.into(), ai_fix: ai_fix.into() }
    }
}

/// Holiday-content heuristic result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalData {
    pub score: u32,
    pub keywords: Vec<String>,
    pub message: String,
}
