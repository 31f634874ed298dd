//! Best-effort extractive summaries.
//!
//! Summaries are built from paragraph sentences ranked by [`lsa`]. Nothing in
//! this module fails: every problem maps onto one of four fixed messages that
//! are shown to the reader in place of a summary.

pub mod lsa;

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{LANGUAGE, get};
use unicode_segmentation::UnicodeSegmentation;

use crate::fetch::{FetchConfig, fetch_url};
use crate::parse::Document;

pub const NO_CONTENT: &str = "Unable to extract sufficient content from this URL for summarization.";
pub const NO_SUMMARY: &str = "Unable to generate a meaningful summary from this content.";
pub const TOO_SHORT: &str = "This blog post is very short or has limited extractable content.";
pub const UNAVAILABLE: &str =
    "Summary generation unavailable. Please ensure the URL is accessible and contains readable text content.";

/// Default number of sentences in a summary.
pub const DEFAULT_SENTENCES: usize = 6;
/// Summaries shorter than this are replaced by [`TOO_SHORT`].
const MIN_SUMMARY_CHARS: usize = 50;
/// Latent dimensions kept, as a share of all of them.
const REDUCTION_RATIO: f64 = 1.0;
/// Only the leading sentences of very long pages are ranked.
const MAX_SENTENCES: usize = 300;

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

/// Fetches `url` and summarizes it in at most `sentence_count` sentences.
///
/// A failed fetch yields [`UNAVAILABLE`].
pub async fn summarize_url(url: &str, sentence_count: usize, config: &FetchConfig) -> String {
    match fetch_url(url, config).await {
        Ok(html) => summarize_html(&html, sentence_count),
        Err(e) => {
            tracing::warn!(url, error = %e, "summary fetch failed");
            UNAVAILABLE.to_string()
        }
    }
}

/// Summarizes an HTML page in at most `sentence_count` sentences.
///
/// Selected sentences keep their document order and are joined by a space.
pub fn summarize_html(html: &str, sentence_count: usize) -> String {
    let doc = Document::parse_stripped(html);
    let mut sentences = extract_sentences(&doc);
    if sentences.is_empty() {
        tracing::warn!("no sentences to summarize");
        return NO_CONTENT.to_string();
    }
    sentences.truncate(MAX_SENTENCES);

    let terms: Vec<Vec<String>> = sentences.iter().map(|s| sentence_terms(s)).collect();
    let ranks = lsa::rank_sentences(&terms, REDUCTION_RATIO);

    let mut order: Vec<usize> = (0..ranks.len()).collect();
    order.sort_by(|&a, &b| ranks[b].total_cmp(&ranks[a]));
    let mut chosen: Vec<usize> = order.into_iter().take(sentence_count).collect();
    chosen.sort_unstable();

    let summary = chosen
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ");

    if summary.is_empty() {
        tracing::warn!("summarizer selected no sentences");
        NO_SUMMARY.to_string()
    } else if summary.chars().count() < MIN_SUMMARY_CHARS {
        tracing::debug!(chars = summary.chars().count(), "summary too short");
        TOO_SHORT.to_string()
    } else {
        summary
    }
}

/// Paragraph sentences in document order, falling back to the page text
/// when the page has no paragraphs.
fn extract_sentences(doc: &Document) -> Vec<String> {
    let sentences: Vec<String> = doc
        .select_all("p")
        .iter()
        .flat_map(|p| split_sentences(&p.text()))
        .collect();

    if sentences.is_empty() { split_sentences(&doc.text_content()) } else { sentences }
}

/// Splits text at Unicode sentence boundaries.
fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences().filter_map(normalize_sentence).collect()
}

fn normalize_sentence(raw: &str) -> Option<String> {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    normalized.chars().any(char::is_alphanumeric).then_some(normalized)
}

fn sentence_terms(sentence: &str) -> Vec<String> {
    sentence
        .unicode_words()
        .map(str::to_lowercase)
        .filter(|term| !STOP_WORDS.contains(term))
        .collect()
}
