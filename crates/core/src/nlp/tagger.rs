//! Rule-based part-of-speech tagging and noun-phrase chunking.
//!
//! Tags come from closed-class word lists first, then a small open-class
//! lexicon, then suffix rules; anything left over is a noun. Noun phrases are
//! maximal runs of adjectives and nouns that end on a noun, plus the two- and
//! three-word sub-runs inside them that also end on a noun.

use std::sync::LazyLock;

use regex::Regex;

use super::{PhraseExtractor, PosTag, PosTagger, TaggedToken};

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9]+(?:['’\-][A-Za-z0-9]+)*|[^\sA-Za-z0-9]").expect("valid token regex")
});

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no", "all", "both", "either",
    "neither", "another", "such", "what", "which", "whose",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "out", "off", "over", "under", "again", "further", "then",
    "once", "than", "as", "like", "via", "per", "within", "without", "across", "along", "around", "behind", "beyond",
    "near", "toward", "towards", "upon", "among",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your", "yours", "yourself",
    "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "who", "whom", "there", "here", "someone", "something", "anyone", "anything",
    "everyone", "everything", "nobody", "nothing",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "if", "unless", "until", "when",
    "whenever", "where", "whereas", "whether", "since",
];

const VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "shall", "should", "can", "could", "may", "might", "must", "get", "gets", "got", "make", "makes", "made",
    "go", "goes", "went", "gone", "know", "knows", "knew", "think", "thinks", "thought", "take", "takes", "took",
    "see", "sees", "saw", "seen", "come", "comes", "came", "want", "wants", "use", "uses", "find", "finds", "found",
    "give", "gives", "gave", "tell", "tells", "told", "work", "works", "seem", "seems", "feel", "feels", "felt", "try",
    "tries", "leave", "call", "love", "loves", "hate", "hates", "need", "needs", "keep", "keeps", "let", "put", "say",
    "says", "said", "sit", "sits", "sat", "learn", "learns", "read", "write", "writes", "wrote", "show", "shows",
    "help", "helps", "become", "becomes", "became", "build", "builds", "built", "start", "starts", "explain",
    "explains", "share", "shares",
    "don't", "doesn't", "didn't", "can't", "won't", "isn't", "aren't", "wasn't", "weren't",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "best", "better", "bad", "worse", "worst", "new", "old", "big", "small", "large", "little",
    "long", "short", "high", "low", "young", "important", "different", "easy", "hard", "early", "late", "real",
    "simple", "full", "free", "sure", "clear", "whole", "true", "false", "poor", "rich", "happy", "sad", "angry",
    "ugly", "nasty", "stupid", "dumb", "boring", "annoying", "disgusting", "disappointing", "sick", "evil", "wrong",
    "nice", "fine", "lovely", "friendly", "ugliest", "dead", "weak", "strong", "cruel", "mean", "lame", "awesome",
    "amazing", "fantastic", "excellent", "wonderful", "brilliant", "fresh", "modern", "deep", "quick", "slow", "hot",
    "cold", "warm", "main", "top", "key", "common", "special", "popular", "open", "dark", "light", "pretty", "grim",
    "dull", "gross", "lousy", "broken", "tired", "scared", "afraid", "guilty", "upset", "toxic", "neural", "social",
    "digital", "financial", "personal", "local", "global", "natural", "physical", "mental", "final", "total",
];

const ADVERBS: &[&str] = &[
    "not", "very", "too", "also", "just", "only", "even", "still", "already", "always", "never", "often", "sometimes",
    "soon", "now", "today", "here", "there", "quite", "rather", "almost", "well", "much", "more", "most", "less",
    "least", "ever", "perhaps", "maybe", "instead", "indeed", "away", "back",
];

const NOUN_EXCEPTIONS: &[&str] = &[
    "family", "reply", "supply", "assembly", "butterfly", "july", "italy", "fly", "ally", "rally", "jelly", "belly",
    "anomaly", "monopoly", "thing", "king", "ring", "spring", "string", "morning", "evening", "building", "ceiling",
    "wedding", "clothing", "meaning", "feeling", "pudding", "sibling", "darling", "earring", "everything",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish"];

/// Part-of-speech tagger and noun-phrase chunker driven by word lists and suffix rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str, sentence_start: bool) -> PosTag {
        let first = word.chars().next().unwrap_or(' ');
        if !first.is_alphanumeric() {
            return PosTag::Punctuation;
        }
        if word.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Number;
        }

        let lower = word.to_lowercase();
        let lower = lower.as_str();

        if DETERMINERS.contains(&lower) {
            return PosTag::Determiner;
        }
        if PRONOUNS.contains(&lower) {
            return PosTag::Pronoun;
        }
        if PREPOSITIONS.contains(&lower) {
            return PosTag::Preposition;
        }
        if CONJUNCTIONS.contains(&lower) {
            return PosTag::Conjunction;
        }
        if VERBS.contains(&lower) {
            return PosTag::Verb;
        }
        if ADJECTIVES.contains(&lower) {
            return PosTag::Adjective;
        }
        if ADVERBS.contains(&lower) {
            return PosTag::Adverb;
        }
        if NOUN_EXCEPTIONS.contains(&lower) {
            return PosTag::Noun;
        }

        if !sentence_start && first.is_uppercase() {
            return PosTag::ProperNoun;
        }

        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|suffix| lower.len() >= suffix.len() + 2 && lower.ends_with(suffix)) {
            return PosTag::Adjective;
        }
        if lower.len() > 5 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return PosTag::Verb;
        }

        PosTag::Noun
    }

    fn is_sentence_end(word: &str) -> bool {
        matches!(word, "." | "!" | "?")
    }

    fn emit_run(run: &[(String, PosTag)], phrases: &mut Vec<String>) {
        let mut end = run.len();
        while end > 0 && !run[end - 1].1.is_nominal() {
            end -= 1;
        }
        let run = &run[..end];
        if run.len() < 2 {
            return;
        }

        let join = |slice: &[(String, PosTag)]| {
            slice
                .iter()
                .map(|(word, _)| word.to_lowercase())
                .collect::<Vec<_>>()
                .join(" ")
        };

        phrases.push(join(run));

        if run.len() > 2 {
            for start in 0..run.len() {
                for len in 2..=3 {
                    let stop = start + len;
                    if stop > run.len() || (start == 0 && stop == run.len()) {
                        continue;
                    }
                    if run[stop - 1].1.is_nominal() {
                        phrases.push(join(&run[start..stop]));
                    }
                }
            }
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let mut sentence_start = true;
        TOKEN_RE
            .find_iter(text)
            .map(|m| {
                let word = m.as_str();
                let tag = Self::tag_word(word, sentence_start);
                sentence_start = Self::is_sentence_end(word);
                TaggedToken { word: word.to_string(), tag }
            })
            .collect()
    }
}

impl PhraseExtractor for RuleTagger {
    fn noun_phrases(&self, text: &str) -> Vec<String> {
        let mut phrases = Vec::new();
        let mut run: Vec<(String, PosTag)> = Vec::new();

        for token in self.tag(text) {
            let extends_run = match token.tag {
                PosTag::Noun | PosTag::ProperNoun | PosTag::Adjective => true,
                // gerund heads such as "machine learning"
                PosTag::Verb => !run.is_empty() && token.word.to_lowercase().ends_with("ing"),
                _ => false,
            };

            if extends_run {
                let tag = if token.tag == PosTag::Verb { PosTag::Noun } else { token.tag };
                run.push((token.word, tag));
            } else {
                Self::emit_run(&run, &mut phrases);
                run.clear();
            }
        }
        Self::emit_run(&run, &mut phrases);

        phrases
    }
}
