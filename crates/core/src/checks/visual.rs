//! Visual design: image count, alt text, and viewport.

use rand::Rng;

use super::CheckResult;
use crate::Document;
use crate::placeholder::Placeholder;
use crate::report::{MAX_SCORE, Metric, Priority, Recommendation};

const SPARSE_LAYOUT_SCORE: u32 = 60;
const MISSING_ALT_PENALTY: u32 = 10;

pub fn check<R: Rng + ?Sized>(doc: &Document, topic: &str, min_images: usize, rng: &mut R) -> CheckResult {
    let mut issues = Vec::new();

    let images = doc.select_all("img");
    let mut layout = MAX_SCORE;
    if images.len() < min_images {
        layout = SPARSE_LAYOUT_SCORE;
        issues.push(Recommendation::new(
            Priority::Medium,
            "Insufficient Visual Content",
            format!(
                "Your article has only {} image(s). Add 2-4 more relevant images to improve engagement and break up text.",
                images.len()
            ),
            format!(
                "Add images for: 1) Hero/header image, 2) Visual examples related to {}, 3) Infographics or charts, 4) Author photo or conclusion image.",
                topic
            ),
        ));
    }

    let missing_alt = images
        .iter()
        .filter(|img| img.attr("alt").is_none_or(str::is_empty))
        .count();
    if missing_alt > 0 {
        layout = layout.saturating_sub(missing_alt as u32 * MISSING_ALT_PENALTY);
        issues.push(Recommendation::new(
            Priority::High,
            "Missing Alt Text for Accessibility",
            format!("{} image(s) lack alt text. This hurts accessibility and SEO.", missing_alt),
            format!(
                "Example fix: <img src='your-image.jpg' alt='Descriptive text about the image showing {}'> - Add similar descriptions to all {} images.",
                topic, missing_alt
            ),
        ));
    }

    let mobile = if doc.meta("viewport").is_some() {
        MAX_SCORE
    } else {
        issues.push(Recommendation::new(
            Priority::High,
            "Mobile Optimization Missing",
            "No viewport meta tag detected. Your site may not display properly on mobile devices.",
            "Add this to your HTML <head>: <meta name='viewport' content='width=device-width, initial-scale=1.0'>",
        ));
        0
    };

    CheckResult::new(
        vec![
            Metric::new("Layout", layout),
            Placeholder::ColorScheme.metric(rng),
            Metric::new("Mobile Response", mobile),
        ],
        issues,
    )
}
