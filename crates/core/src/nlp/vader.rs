//! VADER (Valence Aware Dictionary and sEntiment Reasoner) lexicon scorer.

use unicase::UniCase;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::SentimentLexicon;

/// Sentiment scorer backed by the VADER lexicon and rule set.
pub struct VaderLexicon {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderLexicon {
    pub fn new() -> Self {
        Self { analyzer: SentimentIntensityAnalyzer::new() }
    }
}

impl Default for VaderLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for VaderLexicon {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        scores["compound"].clamp(-1.0, 1.0)
    }

    fn valence(&self, word: &str) -> Option<f64> {
        vader_sentiment::LEXICON.get(&UniCase::new(word)).copied()
    }
}
