//! Library API integration tests
use pagegrade_core::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

fn analyzer() -> PageAnalyzer {
    let config = AnalyzerConfig::builder()
        .topic_model_path(get_fixture_path("topic_models.json"))
        .build();
    PageAnalyzer::from_config(config).expect("fixture topic model should load")
}

fn analyze_fixture(name: &str, seed: u64) -> AnalysisReport {
    analyzer().analyze_document(&read_fixture(name), String::new(), &mut StdRng::seed_from_u64(seed))
}

fn titles(report: &AnalysisReport) -> Vec<&str> {
    report.recommendations.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_blog_post_report() {
    let report = analyze_fixture("blog_post.html", 1);

    assert_eq!(report.author, "Ada Lovelace");
    assert_eq!(report.topic, "Technology");
    assert!(report.matched_keywords.contains(&"machine learning".to_string()));
    assert!(report.matched_keywords.contains(&"neural networks".to_string()));
    assert_eq!(report.sentiment.label, SentimentLabel::Positive);

    let platforms: Vec<&str> = report.social_links.iter().map(|l| l.platform.as_str()).collect();
    assert_eq!(platforms, vec!["Twitter", "Linkedin", "Github"]);

    assert_eq!(titles(&report), vec!["Content Length Below Target"]);
    assert_eq!(report.categories.discoverability.metric("Meta Descriptions"), Some(100));
    assert_eq!(report.categories.discoverability.metric("Headings"), Some(100));
    assert_eq!(report.categories.content.metric("Grammar"), Some(100));
    assert_eq!(report.categories.visual.metric("Layout"), Some(100));
    assert_eq!(report.categories.visual.metric("Mobile Response"), Some(100));
    assert_eq!(report.seasonal_data.score, 0);
}

#[test]
fn test_blog_post_script_text_is_ignored() {
    let report = analyze_fixture("blog_post.html", 1);
    assert!(report.sentiment.improvements.iter().all(|i| i.word != "terrible"));
}

#[test]
fn test_bare_page_report() {
    let report = analyze_fixture("bare_page.html", 2);

    assert_eq!(report.author, UNKNOWN_AUTHOR);
    assert_eq!(report.topic, DEFAULT_TOPIC);
    assert!(report.social_links.is_empty());
    assert_eq!(
        titles(&report),
        vec![
            "Missing Meta Description",
            "Missing H1 Heading",
            "Content Length Below Target",
            "Insufficient Visual Content",
            "Mobile Optimization Missing",
            "Social Growth",
            "Social Growth",
        ]
    );

    let high: Vec<&str> = report
        .recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(high, vec!["Missing Meta Description", "Missing H1 Heading", "Mobile Optimization Missing"]);
}

#[test]
fn test_issues_page_report() {
    let report = analyze_fixture("issues_page.html", 3);

    assert_eq!(report.author, "Sam Baker");
    assert_eq!(
        report.social_links,
        vec![SocialLink { platform: "Instagram".to_string(), url: "https://www.instagram.com/sambakes".to_string() }]
    );

    let discoverability = &report.categories.discoverability;
    assert_eq!(discoverability.metric("Meta Descriptions"), Some(60));
    assert_eq!(discoverability.metric("Headings"), Some(50));

    let multiple = report.recommendations.iter().find(|r| r.title == "Multiple H1 Headings").unwrap();
    assert_eq!(
        multiple.ai_fix,
        "Current H1s: Holiday Baking, Christmas Cookies. Choose the most important one and convert others to H2 or H3."
    );

    assert_eq!(report.categories.content.metric("Grammar"), Some(90));
    let grammar = report.recommendations.iter().filter(|r| r.title == "Grammar & Style Issue").count();
    assert_eq!(grammar, 3);

    assert_eq!(report.categories.visual.metric("Layout"), Some(40));
    assert!(titles(&report).contains(&"Missing Alt Text for Accessibility"));

    assert_eq!(report.seasonal_data.score, 50);
    assert_eq!(report.seasonal_data.keywords, vec!["christmas", "holiday", "december", "snow", "festive"]);

    let social: Vec<&str> = report
        .recommendations
        .iter()
        .filter(|r| r.title == "Social Growth")
        .map(|r| r.desc.as_str())
        .collect();
    assert_eq!(
        social,
        vec!["Add Twitter/X to engage with the tech community.", "Add LinkedIn to build professional credibility."]
    );
}

#[test]
fn test_report_invariants_across_seeds() {
    let analyzer = analyzer();
    for name in ["blog_post.html", "bare_page.html", "issues_page.html"] {
        let html = read_fixture(name);
        for seed in 0..10 {
            let report = analyzer.analyze_document(&html, String::new(), &mut StdRng::seed_from_u64(seed));
            let scores = report.categories.scores();

            assert!(report.overall_score <= 100);
            assert_eq!(report.overall_score, scores.iter().sum::<u32>() / 6);
            for (_, category) in report.categories.iter() {
                let sum: u32 = category.metrics.iter().map(|m| m.value).sum();
                assert_eq!(category.score, sum / category.metrics.len() as u32);
            }
        }
    }
}

#[test]
fn test_json_output_shape() {
    let report = analyze_fixture("blog_post.html", 4);
    let json = convert_to_json(&report, &JsonConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    for key in [
        "overall_score",
        "author",
        "social_links",
        "topic",
        "matched_keywords",
        "sentiment",
        "categories",
        "recommendations",
        "seasonal_data",
        "summary",
    ] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }
    let categories = value["categories"].as_object().unwrap();
    let keys: Vec<&str> = categories.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["discoverability", "content", "visual", "ux", "engagement", "topic_fit"]);
    assert_eq!(value["recommendations"][0]["priority"], "MEDIUM");
}

#[test]
fn test_text_output() {
    let report = analyze_fixture("issues_page.html", 5);
    let text = convert_to_text(&report, &TextConfig::default());

    assert!(text.contains("Author: Sam Baker"));
    assert!(text.contains("[HIGH] Missing Alt Text for Accessibility"));
}

#[test]
fn test_summarize_fixture() {
    let summary = summarize_html(&read_fixture("blog_post.html"), 2);
    assert!(summary.chars().count() >= 50);
    assert!(!summary.contains("analytics"));

    assert_eq!(
        summarize_html(&read_fixture("bare_page.html"), 6),
        "This blog post is very short or has limited extractable content."
    );
}

#[test]
fn test_topic_model_loading() {
    let model = TopicModel::load(Path::new(&get_fixture_path("topic_models.json"))).unwrap();
    let names: Vec<&str> = model.topics().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Technology", "Food", "Travel", "Personal Finance"]);

    let missing = TopicModel::load(Path::new("../../tests/fixtures/does_not_exist.json")).unwrap();
    assert!(missing.is_empty());
}

#[test]
fn test_malformed_topic_model_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("topics.json");
    std::fs::write(&path, r#"{"Broken": {"keywords": "not a list"}}"#).unwrap();

    let config = AnalyzerConfig::builder().topic_model_path(&path).build();
    let result = PageAnalyzer::from_config(config);
    assert!(matches!(result, Err(PagegradeError::TopicModelError(_))));
}

#[test]
fn test_fetch_file_api() {
    let html = fetch_file(&get_fixture_path("bare_page.html")).unwrap();
    assert!(html.contains("Just a few short notes."));

    let err = fetch_file(&get_fixture_path("nope.html")).unwrap_err();
    assert!(matches!(err, PagegradeError::FileNotFound(_)));
    assert!(!err.is_fetch_error());
}

#[tokio::test]
async fn test_analyze_async_without_url() {
    let report = analyzer().analyze(&read_fixture("bare_page.html"), "").await;
    assert!(report.summary.is_empty());
}

#[tokio::test]
async fn test_fetch_and_analyze_rejects_bad_url() {
    let err = analyzer().fetch_and_analyze("not a url").await.unwrap_err();
    assert!(err.is_fetch_error());
}
