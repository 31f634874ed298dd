use crate::report::{AnalysisReport, Category};

const RULE_CHAR: char = '=';

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Wrap summary and recommendation text at this width (0 = no wrapping)
    pub line_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { line_width: 80 }
    }
}

/// Render a report as plain text
pub fn convert_to_text(report: &AnalysisReport, config: &TextConfig) -> String {
    let mut out = String::new();

    out.push_str(&heading(&format!("Overall score: {}/100", report.overall_score)));

    let mut meta_parts = vec![format!("Author: {}", report.author), format!("Topic: {}", report.topic)];
    if !report.matched_keywords.is_empty() {
        meta_parts.push(format!("Keywords: {}", report.matched_keywords.join(", ")));
    }
    out.push_str(&meta_parts.join(" | "));
    out.push('\n');

    out.push_str(&format!("Sentiment: {:?} ({:.2})\n", report.sentiment.label, report.sentiment.score));
    for improvement in &report.sentiment.improvements {
        out.push_str(&format!("  - {} {}: {}\n", improvement.word, improvement.context, improvement.suggestion));
    }

    if !report.social_links.is_empty() {
        out.push_str("Social:\n");
        for link in &report.social_links {
            out.push_str(&format!("  - {}: {}\n", link.platform, link.url));
        }
    }
    out.push_str(&format!("Seasonal: {}\n", report.seasonal_data.message));

    out.push('\n');
    out.push_str(&heading("Categories"));
    for (key, category) in report.categories.iter() {
        push_category(&mut out, key, category);
    }

    if !report.recommendations.is_empty() {
        out.push('\n');
        out.push_str(&heading("Recommendations"));
        for (i, rec) in report.recommendations.iter().enumerate() {
            out.push_str(&format!("{}. [{}] {}\n", i + 1, rec.priority, rec.title));
            out.push_str(&indent(&wrap_text(&rec.desc, config.line_width), "   "));
            out.push_str(&indent(&wrap_text(&format!("Fix: {}", rec.ai_fix), config.line_width), "   "));
        }
    }

    if !report.summary.is_empty() {
        out.push('\n');
        out.push_str(&heading("Summary"));
        out.push_str(&wrap_text(&report.summary, config.line_width));
        out.push('\n');
    }

    out.trim_end().to_string()
}

fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, RULE_CHAR.to_string().repeat(title.chars().count()))
}

fn push_category(out: &mut String, key: &str, category: &Category) {
    out.push_str(&format!("{:<16}{:>3}\n", key, category.score));
    for metric in &category.metrics {
        out.push_str(&format!("  {:<18}{:>3}\n", metric.name, metric.value));
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines().map(|line| format!("{}{}\n", prefix, line)).collect()
}

/// Wrap text to specified line width
fn wrap_text(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if width == 0 {
        return words.join(" ");
    }

    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
