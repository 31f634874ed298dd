//! Social presence suggestions.

use crate::report::{Priority, Recommendation, SocialLink};

const TWITTER_SUGGESTION: &str = "Add Twitter/X to engage with the tech community.";
const LINKEDIN_SUGGESTION: &str = "Add LinkedIn to build professional credibility.";

/// One low-priority "Social Growth" entry per missing Twitter/X or LinkedIn link.
pub fn recommendations(links: &[SocialLink]) -> Vec<Recommendation> {
    let has = |platform: &str| links.iter().any(|link| link.platform == platform);

    let mut suggestions = Vec::new();
    if !has("Twitter") {
        suggestions.push(TWITTER_SUGGESTION);
    }
    if !has("Linkedin") {
        suggestions.push(LINKEDIN_SUGGESTION);
    }

    suggestions
        .into_iter()
        .map(|suggestion| {
            let platform = suggestion.split_whitespace().nth(1).unwrap_or_default();
            Recommendation::new(
                Priority::Low,
                "Social Growth",
                suggestion,
                format!("Add social sharing buttons for {} to your blog sidebar or footer.", platform),
            )
        })
        .collect()
}
