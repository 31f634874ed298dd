//! Discoverability: meta description and H1 structure.

use rand::Rng;

use super::{CheckResult, truncate_chars};
use crate::Document;
use crate::placeholder::Placeholder;
use crate::report::{Metric, Priority, Recommendation};

const MIN_DESCRIPTION_CHARS: usize = 50;
const MAX_DESCRIPTION_CHARS: usize = 160;
const MAX_LISTED_HEADINGS: usize = 3;
const HEADING_EXCERPT_CHARS: usize = 50;

pub fn check<R: Rng + ?Sized>(doc: &Document, topic: &str, rng: &mut R) -> CheckResult {
    let mut issues = Vec::new();

    let description = meta_description_score(doc, topic, &mut issues);
    let headings = headings_score(doc, topic, &mut issues);

    CheckResult::new(
        vec![
            Placeholder::Keywords.metric(rng),
            Metric::new("Meta Descriptions", description),
            Metric::new("Headings", headings),
        ],
        issues,
    )
}

fn meta_description_score(doc: &Document, topic: &str, issues: &mut Vec<Recommendation>) -> u32 {
    let current = match doc.meta_content("description") {
        Some(content) if !content.is_empty() => content,
        _ => {
            issues.push(Recommendation::new(
                Priority::High,
                "Missing Meta Description",
                "Your page is missing a meta description. This appears in search results and affects click-through rates.",
                format!(
                    "Add this to your HTML head: <meta name='description' content='Write a compelling 120-160 character summary about {} that includes your main keywords'>",
                    topic.to_lowercase()
                ),
            ));
            return 0;
        }
    };

    let len = current.chars().count();
    if len < MIN_DESCRIPTION_CHARS {
        issues.push(Recommendation::new(
            Priority::Medium,
            "Meta Description Too Short",
            format!(
                "Your meta description is only {} characters. Aim for 120-160 characters for better search visibility.",
                len
            ),
            format!(
                "Current: '{}...' → Expand this to 120-160 characters by adding more relevant details about your {} content.",
                truncate_chars(&current, 100),
                topic.to_lowercase()
            ),
        ));
        60
    } else if len > MAX_DESCRIPTION_CHARS {
        issues.push(Recommendation::new(
            Priority::Medium,
            "Meta Description Too Long",
            format!(
                "Your meta description is {} characters. Keep it under 160 to avoid truncation in search results.",
                len
            ),
            format!(
                "Current ({} chars): '{}...' → Trim to 120-160 characters while keeping key information.",
                len,
                truncate_chars(&current, 80)
            ),
        ));
        60
    } else {
        100
    }
}

fn headings_score(doc: &Document, topic: &str, issues: &mut Vec<Recommendation>) -> u32 {
    let h1s = doc.select_all("h1");

    match h1s.len() {
        0 => {
            issues.push(Recommendation::new(
                Priority::High,
                "Missing H1 Heading",
                "Your page lacks a main H1 heading. This is crucial for SEO and helps search engines understand your content.",
                format!("Add an H1 tag with your main topic: <h1>Your Main Title About {}</h1>", topic),
            ));
            0
        }
        1 => 100,
        count => {
            let texts: Vec<String> = h1s
                .iter()
                .take(MAX_LISTED_HEADINGS)
                .map(|h1| truncate_chars(h1.text().trim(), HEADING_EXCERPT_CHARS).to_string())
                .collect();
            issues.push(Recommendation::new(
                Priority::Medium,
                "Multiple H1 Headings",
                format!("You have {} H1 headings. Use only one H1 per page for better SEO.", count),
                format!(
                    "Current H1s: {}. Choose the most important one and convert others to H2 or H3.",
                    texts.join(", ")
                ),
            ));
            50
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn run(html: &str) -> CheckResult {
        check(&Document::parse(html), "Technology", &mut StdRng::seed_from_u64(0))
    }

    fn titles(result: &CheckResult) -> Vec<&str> {
        result.issues.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_missing_description_and_heading() {
        let result = run("<html><body><p>Plain page</p></body></html>");

        assert_eq!(titles(&result), vec!["Missing Meta Description", "Missing H1 Heading"]);
        assert!(result.issues.iter().all(|i| i.priority == Priority::High));
        assert_eq!(result.metric("Meta Descriptions"), 0);
        assert_eq!(result.metric("Headings"), 0);
        assert!(result.issues[0].ai_fix.contains("summary about technology that"));
        assert!(result.issues[1].ai_fix.ends_with("<h1>Your Main Title About Technology</h1>"));
    }

    #[test]
    fn test_empty_description_counts_as_missing() {
        let result = run(r#"<head><meta name="description" content=""></head><h1>T</h1>"#);
        assert_eq!(titles(&result), vec!["Missing Meta Description"]);
    }

    #[rstest]
    #[case(10, 60, Some("Meta Description Too Short"))]
    #[case(49, 60, Some("Meta Description Too Short"))]
    #[case(50, 100, None)]
    #[case(160, 100, None)]
    #[case(161, 60, Some("Meta Description Too Long"))]
    fn test_description_length(#[case] len: usize, #[case] score: u32, #[case] title: Option<&str>) {
        let html = format!(r#"<head><meta name="description" content="{}"></head><h1>T</h1>"#, "d".repeat(len));
        let result = run(&html);

        assert_eq!(result.metric("Meta Descriptions"), score);
        assert_eq!(result.issues.first().map(|i| i.title.as_str()), title);
    }

    #[test]
    fn test_long_description_excerpt() {
        let html = format!(r#"<meta name="description" content="{}"><h1>T</h1>"#, "x".repeat(200));
        let result = run(&html);

        assert_eq!(result.issues[0].desc, "Your meta description is 200 characters. Keep it under 160 to avoid truncation in search results.");
        assert_eq!(
            result.issues[0].ai_fix,
            format!(
                "Current (200 chars): '{}...' → Trim to 120-160 characters while keeping key information.",
                "x".repeat(80)
            )
        );
    }

    #[test]
    fn test_multiple_headings() {
        let long = "L".repeat(70);
        let html = format!(
            r#"<meta name="description" content="{}"><h1> One </h1><h1>{}</h1><h1>Three</h1><h1>Four</h1>"#,
            "d".repeat(100),
            long
        );
        let result = run(&html);

        assert_eq!(result.metric("Headings"), 50);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].priority, Priority::Medium);
        assert_eq!(result.issues[0].desc, "You have 4 H1 headings. Use only one H1 per page for better SEO.");
        assert_eq!(
            result.issues[0].ai_fix,
            format!(
                "Current H1s: One, {}, Three. Choose the most important one and convert others to H2 or H3.",
                "L".repeat(50)
            )
        );
    }

    #[test]
    fn test_keywords_placeholder_range() {
        let result = run("<h1>T</h1>");
        assert!((60..=90).contains(&result.metric("Keywords")));
        let names: Vec<&str> = result.category.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Keywords", "Meta Descriptions", "Headings"]);
    }
}
