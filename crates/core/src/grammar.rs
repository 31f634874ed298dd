//! Rule-based grammar and style scan.
//!
//! Patterns are raw substrings padded with spaces and matched against the
//! space-padded, lower-cased text. Matching is not word-boundary aware beyond
//! that padding, and overlapping patterns are counted independently.

use serde::{Deserialize, Serialize};

const START_SCORE: i64 = 100;
const GRAMMAR_PENALTY: i64 = 2;
const LONG_SENTENCE_PENALTY: i64 = 3;
const LONG_SENTENCE_WORDS: usize = 30;

/// Common mistakes and their corrections.
const COMMON_ERRORS: &[(&str, &str)] = &[
    (" their is ", "there is"),
    (" i ", " I "),
    (" dont ", " don't "),
    (" cant ", " can't "),
    (" im ", " I'm "),
    (" u ", " you "),
    (" ur ", " your "),
    (" alot ", " a lot "),
    (" tehm ", " them "),
    (" recieve ", " receive "),
    (" seperate ", " separate "),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    Grammar,
    Style,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub desc: String,
    pub count: usize,
}

/// Score (0..=100) and every issue found, grammar issues first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarReport {
    pub score: u32,
    pub issues: Vec<GrammarIssue>,
}

pub fn check(text: &str) -> GrammarReport {
    let mut score = START_SCORE;
    let mut issues = Vec::new();

    let padded = format!(" {} ", text.to_lowercase());
    for (error, correction) in COMMON_ERRORS {
        let count = padded.matches(error).count();
        if count > 0 {
            score -= count as i64 * GRAMMAR_PENALTY;
            issues.push(GrammarIssue {
                kind: IssueKind::Grammar,
                desc: format!(
                    "Found '{}', consider using '{}' instead.",
                    error.trim(),
                    correction.trim()
                ),
                count,
            });
        }
    }

    let long_sentences = text
        .split('.')
        .filter(|sentence| sentence.split_whitespace().count() > LONG_SENTENCE_WORDS)
        .count();
    if long_sentences > 0 {
        score -= long_sentences as i64 * LONG_SENTENCE_PENALTY;
        issues.push(GrammarIssue {
            kind: IssueKind::Style,
            desc: format!(
                "Found {} very long sentences. Consider breaking them up.",
                long_sentences
            ),
            count: long_sentences,
        });
    }

    GrammarReport { score: score.max(0) as u32, issues }
}
