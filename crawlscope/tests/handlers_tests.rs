use crawlscope::handlers::*;
use crawlscope_core::config::DEFAULT_SUBMIT_DELAY_MS;
use crawlscope_core::{CrawlOptionId, Field};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::NamedTempFile;

fn scopes(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_raw_input_from_args() {
    let input = raw_input_from_args(&scopes(&["startWith"]), Some("/blog"), None);
    assert_eq!(input.items, vec!["startWith".to_string()]);
    assert_eq!(input.url_path.as_deref(), Some("/blog"));
    assert_eq!(input.page_url, None);
}

#[test]
fn test_load_option_input_prefers_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, r#"{{"items":["all"]}}"#)?;

    let path = PathBuf::from(temp_file.path());
    let input = load_option_input(Some(&path), &scopes(&["one"]), None, None)?;

    assert_eq!(input.items, vec!["all".to_string()]);
    Ok(())
}

#[test]
fn test_load_option_input_bad_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "not json").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_option_input(Some(&path), &[], None, None);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to parse form input"));
}

#[test]
fn test_check_report_forms_are_independent() {
    let input = raw_input_from_args(&scopes(&["all"]), None, None);
    let report = build_check_report(Some("not-a-url"), &input);

    assert!(report.base_url.as_ref().unwrap().is_err());
    assert!(report.options.is_ok());
    assert!(!report.is_valid());
}

#[test]
fn test_check_report_without_base_url() {
    let input = raw_input_from_args(&scopes(&["one"]), None, Some("https://example.com/page"));
    let report = build_check_report(None, &input);

    assert!(report.base_url.is_none());
    assert!(report.is_valid());
    assert_eq!(
        report.options.as_ref().unwrap().scope.id(),
        CrawlOptionId::One
    );
}

#[test]
fn test_check_report_two_scopes_blocked() {
    let input = raw_input_from_args(&scopes(&["all", "one"]), None, None);
    let report = build_check_report(Some("https://example.com"), &input);

    let errors = report.options.as_ref().unwrap_err();
    assert!(errors.contains(Field::Items));
    assert!(!report.is_valid());
}

#[test]
fn test_check_report_json() {
    let input = raw_input_from_args(&scopes(&["startWith"]), Some("blog"), None);
    let report = build_check_report(Some("https://example.com"), &input);
    let json = report.to_json(false);

    assert_eq!(json["submitted"], false);
    assert_eq!(json["baseUrl"]["valid"], true);
    assert_eq!(json["baseUrl"]["url"], "https://example.com/");
    assert_eq!(json["options"]["valid"], false);
    assert_eq!(json["options"]["errors"]["urlPath"], "Path must start with /");
}

#[test]
fn test_check_report_json_submitted() {
    let input = raw_input_from_args(&scopes(&["one"]), None, Some("https://example.com/a"));
    let report = build_check_report(None, &input);
    let json = report.to_json(true);

    assert_eq!(json["submitted"], true);
    assert_eq!(json["baseUrl"], serde_json::Value::Null);
    assert_eq!(json["options"]["valid"], true);
    assert_eq!(json["options"]["request"]["scope"]["option"], "one");
}

#[test]
fn test_form_config_defaults() {
    let config = form_config(None);
    assert_eq!(config.submit_delay, Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS));
    assert_eq!(config.submit_delay, Duration::from_millis(1000));

    let config = form_config(Some(250));
    assert_eq!(config.submit_delay, Duration::from_millis(250));
}

#[test]
fn test_check_report_text() {
    let input = raw_input_from_args(&scopes(&["startWith"]), None, None);
    let report = build_check_report(None, &input);
    let text = report.render_text();

    assert!(text.contains("not provided"));
    assert!(text.contains("urlPath"));
    assert!(text.contains("URL path is required"));
    assert!(text.contains("RequiredFieldError"));
}

#[test]
fn test_check_report_text_valid_path() {
    let input = raw_input_from_args(&scopes(&["startWith"]), Some("/docs"), None);
    let report = build_check_report(Some("https://example.com"), &input);
    let text = report.render_text();

    assert!(report.is_valid());
    assert!(text.contains("Start With"));
    assert!(text.contains("/docs"));
}
