use crate::Result;
use crate::report::AnalysisReport;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Serialize a report with the field names report viewers expect
pub fn convert_to_json(report: &AnalysisReport, config: &JsonConfig) -> Result<String> {
    if config.pretty { Ok(serde_json::to_string_pretty(report)?) } else { Ok(serde_json::to_string(report)?) }
}

/// Read a report back from its JSON form
pub fn report_from_json(json: &str) -> Result<AnalysisReport> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Categories, Category, Metric, Priority, Recommendation, SeasonalData, Sentiment, SentimentLabel};

    fn sample_report() -> AnalysisReport {
        let category = |value| Category::from_metrics(vec![Metric::new("Only", value)]);
        AnalysisReport {
            overall_score: 70,
            author: "Unknown Author".to_string(),
            social_links: Vec::new(),
            topic: "Other".to_string(),
            matched_keywords: Vec::new(),
            sentiment: Sentiment { score: 0.0, label: SentimentLabel::Neutral, improvements: Vec::new() },
            categories: Categories {
                discoverability: category(70),
                content: category(70),
                visual: category(70),
                ux: category(70),
                engagement: category(70),
                topic_fit: category(70),
            },
            recommendations: vec![Recommendation::new(Priority::High, "Missing H1 Heading", "desc", "fix")],
            seasonal_data: SeasonalData {
                score: 0,
                keywords: Vec::new(),
                message: "No Christmas content detected.".to_string(),
            },
            summary: String::new(),
        }
    }

    #[test]
    fn test_compact_json_field_names() {
        let json = convert_to_json(&sample_report(), &JsonConfig::default()).unwrap();

        assert!(!json.contains('\n'));
        for key in [
            "\"overall_score\"",
            "\"social_links\"",
            "\"matched_keywords\"",
            "\"topic_fit\"",
            "\"seasonal_data\"",
            "\"ai_fix\"",
            "\"improvements\"",
        ] {
            assert!(json.contains(key), "missing {}", key);
        }
        assert!(json.contains(r#""priority":"HIGH""#));
    }

    #[test]
    fn test_pretty_json() {
        let json = convert_to_json(&sample_report(), &JsonConfig { pretty: true }).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("  \"overall_score\": 70"));
    }

    #[test]
    fn test_report_survives_json() {
        let report = sample_report();
        let json = convert_to_json(&report, &JsonConfig::default()).unwrap();
        assert_eq!(report_from_json(&json).unwrap(), report);
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = report_from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::PagegradeError::SerializationError(_)));
    }
}
