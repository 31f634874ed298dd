//! Content quality: length, grammar, and (placeholder) readability.

use rand::Rng;

use super::CheckResult;
use crate::grammar;
use crate::placeholder::Placeholder;
use crate::report::{MAX_SCORE, Metric, Priority, Recommendation};

/// Grammar issues surfaced as recommendations.
const MAX_GRAMMAR_ISSUES: usize = 3;

pub fn check<R: Rng + ?Sized>(text: &str, topic: &str, target_words: usize, rng: &mut R) -> CheckResult {
    let mut issues = Vec::new();

    let words = text.split_whitespace().count();
    let structure = if words >= target_words {
        MAX_SCORE
    } else {
        let needed = target_words - words;
        issues.push(Recommendation::new(
            Priority::Medium,
            "Content Length Below Target",
            format!(
                "Your article has {} words. For better SEO and engagement, aim for {}+ words.",
                words, target_words
            ),
            format!(
                "Add {} more words. Consider expanding on: 1) {} fundamentals, 2) Real-world examples, 3) Expert tips, 4) Common mistakes to avoid.",
                needed, topic
            ),
        ));
        ((words as f64 / target_words as f64) * 100.0) as u32
    };

    let grammar = grammar::check(text);
    for issue in grammar.issues.iter().take(MAX_GRAMMAR_ISSUES) {
        issues.push(Recommendation::new(
            Priority::Medium,
            "Grammar & Style Issue",
            issue.desc.clone(),
            format!(
                "Replace {} occurrence(s). Use Find & Replace in your editor to quickly fix all instances of this error.",
                issue.count
            ),
        ));
    }

    CheckResult::new(
        vec![
            Placeholder::Readability.metric(rng),
            Metric::new("Grammar", grammar.score),
            Metric::new("Structure", structure),
        ],
        issues,
    )
}
