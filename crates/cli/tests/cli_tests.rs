//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("pagegrade")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn graded(args: &[&str]) -> serde_json::Value {
    let topics = get_fixture_path("topic_models.json");
    let output = cmd()
        .args(["--topics", &topics, "--seed", "7"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_file_input() {
    let report = graded(&[&get_fixture_path("blog_post.html")]);

    assert_eq!(report["author"], "Ada Lovelace");
    assert_eq!(report["topic"], "Technology");
    assert_eq!(report["summary"], "");
    assert!(report["overall_score"].as_u64().unwrap() <= 100);
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("bare_page.html")).unwrap();
    cmd()
        .args(["--topics", &get_fixture_path("topic_models.json"), "-"])
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Missing H1 Heading\""));
}

#[test]
fn test_cli_seed_is_reproducible() {
    let first = graded(&[&get_fixture_path("issues_page.html")]);
    let second = graded(&[&get_fixture_path("issues_page.html")]);
    assert_eq!(first, second);
}

#[test]
fn test_cli_pretty_json() {
    cmd()
        .args(["--pretty", &get_fixture_path("bare_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"));
}

#[test]
fn test_cli_text_format() {
    cmd()
        .args(["-f", "text", &get_fixture_path("issues_page.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall score:"))
        .stdout(predicate::str::contains("Author: Sam Baker"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "markdown", &get_fixture_path("bare_page.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.json");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("blog_post.html"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Report written to"));

    let written = std::fs::read_to_string(&output).unwrap();
    let report: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(report.get("categories").is_some());
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_invalid_url_fails_before_analysis() {
    cmd()
        .args(["--timeout", "1", "http://[::1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch URL"));
}

#[test]
fn test_cli_malformed_topic_model() {
    let tmp = TempDir::new().unwrap();
    let topics = tmp.path().join("topics.json");
    std::fs::write(&topics, "[1, 2, 3]").unwrap();

    cmd()
        .args(["--topics", topics.to_str().unwrap(), &get_fixture_path("bare_page.html")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load topic model"));
}

#[test]
fn test_cli_no_summary_with_url() {
    let report = graded(&["--no-summary", "--url", "https://example.invalid/post", &get_fixture_path("blog_post.html")]);
    assert_eq!(report["summary"], "");
}

#[test]
fn test_cli_url_is_summarized_for_local_input() {
    let report = graded(&["--url", "not a url", &get_fixture_path("blog_post.html")]);
    assert_eq!(
        report["summary"],
        "Summary generation unavailable. Please ensure the URL is accessible and contains readable text content."
    );
}

#[test]
fn test_cli_remote_fetch_failure_with_url() {
    cmd()
        .args(["--timeout", "1", "--url", "not a url", "http://[::1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch URL"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("bare_page.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Pagegrade"))
        .stderr(predicate::str::contains("[4/4]"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pagegrade"));
}

#[test]
fn test_cli_requires_input() {
    cmd().assert().failure();
}
