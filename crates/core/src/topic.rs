//! Keyword-overlap topic classification.
//!
//! A [`TopicModel`] maps topic names to keyword sets and is read from a JSON
//! object of the form `{"Topic": {"keywords": ["phrase", ...]}, ...}`. Topics
//! keep the key order of the source file, which is also the tie-break order
//! during classification.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::nlp::PhraseExtractor;
use crate::{PagegradeError, Result};

/// Name returned when no topic matches well enough.
pub const DEFAULT_TOPIC: &str = "Other";

/// File name looked up in the working directory and the user config directory.
pub const TOPIC_MODEL_FILE: &str = "topic_models.json";

const MIN_OVERLAP: usize = 2;
const MIN_PHRASE_CHARS: usize = 4;

/// A single topic and its keyword set.
#[derive(Debug, Clone, PartialEq)]
pub struct Topic {
    pub name: String,
    pub keywords: BTreeSet<String>,
}

#[derive(Deserialize)]
struct TopicEntry {
    #[serde(default)]
    keywords: Vec<String>,
}

/// Ordered collection of topics, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicModel {
    topics: Vec<Topic>,
}

impl TopicModel {
    /// Creates a model from `(name, keywords)` pairs, keeping their order.
    pub fn new<I, S, K>(topics: I) -> Self
    where
        I: IntoIterator<Item = (S, K)>,
        S: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        let topics = topics
            .into_iter()
            .map(|(name, keywords)| Topic {
                name: name.into(),
                keywords: keywords.into_iter().map(Into::into).collect(),
            })
            .collect();
        Self { topics }
    }

    /// Parses a model from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`PagegradeError::TopicModelError`] if the document is not an
    /// object of `{ "keywords": [...] }` entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| PagegradeError::TopicModelError(e.to_string()))?;

        let mut topics = Vec::with_capacity(root.len());
        for (name, value) in root {
            let entry: TopicEntry = serde_json::from_value(value)
                .map_err(|e| PagegradeError::TopicModelError(format!("topic '{}': {}", name, e)))?;
            topics.push(Topic { name, keywords: entry.keywords.into_iter().collect() });
        }

        Ok(Self { topics })
    }

    /// Loads a model from a file. A missing file yields an empty model.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "topic model not found, using empty model");
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)?;
        let model = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), topics = model.len(), "topic model loaded");
        Ok(model)
    }

    /// Loads the model from `explicit` if given, otherwise from the first
    /// default location that exists. Nothing found yields an empty model.
    pub fn load_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_paths().into_iter().find(|p| p.exists()) {
                Some(path) => Self::load(&path),
                None => {
                    tracing::debug!("no topic model in default locations, using empty model");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Default lookup locations: the working directory, then
    /// `~/.config/pagegrade/`.
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(TOPIC_MODEL_FILE)];
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join("pagegrade").join(TOPIC_MODEL_FILE));
        }
        paths
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Result of topic classification.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicMatch {
    pub topic: String,
    /// Matched keywords, sorted.
    pub matched_keywords: Vec<String>,
}

impl TopicMatch {
    fn other() -> Self {
        Self { topic: DEFAULT_TOPIC.to_string(), matched_keywords: Vec::new() }
    }
}

/// Classifies `text` as the topic sharing the most noun phrases with it.
///
/// A topic needs at least two shared phrases to win; on equal overlap the
/// earlier topic in the model is kept.
pub fn classify(text: &str, model: &TopicModel, extractor: &dyn PhraseExtractor) -> TopicMatch {
    if model.is_empty() {
        return TopicMatch::other();
    }

    let phrases: HashSet<String> = extractor
        .noun_phrases(text)
        .into_iter()
        .filter(|phrase| phrase.chars().count() >= MIN_PHRASE_CHARS)
        .map(|phrase| phrase.to_lowercase())
        .collect();

    let mut best = TopicMatch::other();
    let mut max_overlap = 0;

    for topic in model.topics() {
        let matches: Vec<String> = topic
            .keywords
            .iter()
            .filter(|keyword| phrases.contains(keyword.as_str()))
            .cloned()
            .collect();

        if matches.len() > max_overlap && matches.len() >= MIN_OVERLAP {
            max_overlap = matches.len();
            best = TopicMatch { topic: topic.name.clone(), matched_keywords: matches };
        }
    }

    best
}
