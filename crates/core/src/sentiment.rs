//! Overall sentiment plus negative-wording detection.

use std::collections::HashSet;

use crate::nlp::{PosTagger, SentimentLexicon};
use crate::report::{Improvement, Sentiment, SentimentLabel};

const POSITIVE_THRESHOLD: f64 = 0.05;
const NEGATIVE_THRESHOLD: f64 = -0.05;
/// Words with a lexicon valence below this are flagged.
const NEGATIVE_VALENCE: f64 = -0.5;
const MAX_IMPROVEMENTS: usize = 5;
const SUGGESTION: &str = "Consider a more positive alternative";

impl SentimentLabel {
    /// Maps a compound score onto a label; both thresholds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

/// Scores the text and lists up to five strongly negative adjectives or adverbs.
pub fn analyze(text: &str, lexicon: &dyn SentimentLexicon, tagger: &dyn PosTagger) -> Sentiment {
    let score = lexicon.compound(text);

    Sentiment { score, label: SentimentLabel::from_score(score), improvements: find_improvements(text, lexicon, tagger) }
}

fn find_improvements(text: &str, lexicon: &dyn SentimentLexicon, tagger: &dyn PosTagger) -> Vec<Improvement> {
    let mut seen = HashSet::new();

    tagger
        .tag(text)
        .into_iter()
        .filter(|token| token.tag.is_modifier())
        .filter(|token| {
            lexicon
                .valence(&token.word.to_lowercase())
                .is_some_and(|valence| valence < NEGATIVE_VALENCE)
        })
        .filter(|token| seen.insert(token.word.to_lowercase()))
        .take(MAX_IMPROVEMENTS)
        .map(|token| Improvement {
            context: format!("...{}...", token.word),
            word: token.word,
            suggestion: SUGGESTION.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{RuleTagger, VaderLexicon};
    use rstest::rstest;

    #[rstest]
    #[case(0.05, SentimentLabel::Positive)]
    #[case(0.9, SentimentLabel::Positive)]
    #[case(-0.05, SentimentLabel::Negative)]
    #[case(-0.7, SentimentLabel::Negative)]
    #[case(0.0, SentimentLabel::Neutral)]
    #[case(0.0499, SentimentLabel::Neutral)]
    #[case(-0.0499, SentimentLabel::Neutral)]
    fn test_label_boundaries(#[case] score: f64, #[case] expected: SentimentLabel) {
        assert_eq!(SentimentLabel::from_score(score), expected);
    }

    #[test]
    fn test_negative_text() {
        let sentiment = analyze(
            "This product is terrible. The support was awful and the manual is horrible.",
            &VaderLexicon::new(),
            &RuleTagger::new(),
        );

        assert_eq!(sentiment.label, SentimentLabel::Negative);
        let words: Vec<&str> = sentiment.improvements.iter().map(|i| i.word.as_str()).collect();
        assert_eq!(words, vec!["terrible", "awful", "horrible"]);
        assert_eq!(sentiment.improvements[0].context, "...terrible...");
        assert_eq!(sentiment.improvements[0].suggestion, SUGGESTION);
    }

    #[test]
    fn test_improvements_are_deduplicated_case_insensitively() {
        let sentiment = analyze(
            "Terrible food. terrible service. TERRIBLE prices.",
            &VaderLexicon::new(),
            &RuleTagger::new(),
        );

        assert_eq!(sentiment.improvements.len(), 1);
        assert_eq!(sentiment.improvements[0].word, "Terrible");
    }

    #[test]
    fn test_improvements_capped_at_five() {
        let sentiment = analyze(
            "terrible awful horrible bad ugly stupid nasty disgusting",
            &VaderLexicon::new(),
            &RuleTagger::new(),
        );

        assert_eq!(sentiment.improvements.len(), MAX_IMPROVEMENTS);
    }

    #[test]
    fn test_positive_text_has_no_improvements() {
        let sentiment = analyze(
            "What a wonderful and amazing guide, I am so happy I found it!",
            &VaderLexicon::new(),
            &RuleTagger::new(),
        );

        assert_eq!(sentiment.label, SentimentLabel::Positive);
        assert!(sentiment.improvements.is_empty());
        assert!(sentiment.score > 0.0 && sentiment.score <= 1.0);
    }
}
