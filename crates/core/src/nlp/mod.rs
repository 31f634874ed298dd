//! Language capabilities used by the text analyses.
//!
//! The topic classifier needs noun phrases, the sentiment analyzer needs
//! part-of-speech tags and a valence lexicon. Each capability is a trait so
//! an [`AnalysisContext`](crate::AnalysisContext) can be assembled with other
//! implementations; the defaults are [`RuleTagger`] and [`VaderLexicon`].

pub mod tagger;
pub mod vader;

pub use tagger::RuleTagger;
pub use vader::VaderLexicon;

/// Coarse part-of-speech classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    ProperNoun,
    Adjective,
    Adverb,
    Verb,
    Determiner,
    Preposition,
    Pronoun,
    Conjunction,
    Number,
    Punctuation,
}

impl PosTag {
    /// Adjectives and adverbs, the classes scanned for negative wording.
    pub fn is_modifier(self) -> bool {
        matches!(self, PosTag::Adjective | PosTag::Adverb)
    }

    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A token with its original spelling and tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: PosTag,
}

/// Assigns a part-of-speech tag to every token of a text.
pub trait PosTagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

/// Extracts multi-word noun phrases, lower-cased, in document order.
///
/// Duplicates may be returned; callers de-duplicate as needed.
pub trait PhraseExtractor: Send + Sync {
    fn noun_phrases(&self, text: &str) -> Vec<String>;
}

/// A lexicon-based sentiment scorer.
pub trait SentimentLexicon: Send + Sync {
    /// Normalized polarity of the whole text in `[-1, 1]`.
    fn compound(&self, text: &str) -> f64;

    /// Valence of a single lower-cased word, if the lexicon knows it.
    fn valence(&self, word: &str) -> Option<f64>;
}
