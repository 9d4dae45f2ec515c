// Tests for the pure validation functions

use crawlscope_core::error::{Field, FieldError};
use crawlscope_core::option::CrawlOptionId;
use crawlscope_core::request::CrawlScope;
use crawlscope_core::validate::{
    Phase, option_errors, validate_absolute_url, validate_base_url, validate_options,
    validate_raw, validate_selection, validate_url_path,
};
use crawlscope_core::RawOptionInput;

// ============================================================================
// Base URL Tests
// ============================================================================

#[test]
fn test_base_url_valid() {
    let url = validate_base_url("https://example.com").unwrap();
    assert_eq!(url.host_str(), Some("example.com"));
}

#[test]
fn test_base_url_empty() {
    let err = validate_base_url("").unwrap_err();
    assert!(matches!(err, FieldError::UrlFormatError(_)));
    assert_eq!(err.to_string(), "Please enter a valid URL");
}

#[test]
fn test_base_url_not_a_url() {
    assert!(matches!(
        validate_base_url("not-a-url"),
        Err(FieldError::UrlFormatError(_))
    ));
}

#[test]
fn test_base_url_relative_rejected() {
    assert!(validate_base_url("/blog").is_err());
    assert!(validate_base_url("example.com/page").is_err());
}

#[test]
fn test_absolute_url_variants() {
    for valid in [
        "http://localhost:8080/",
        "https://example.com/page",
        "https://example.com/a?b=c#d",
        "ftp://files.example.com",
    ] {
        assert!(validate_absolute_url(valid).is_ok(), "{} should pass", valid);
    }
    for invalid in ["", "not-a-url", "://missing-scheme", "http://", "https://exa mple.com"] {
        assert!(
            matches!(validate_absolute_url(invalid), Err(FieldError::UrlFormatError(_))),
            "{} should fail",
            invalid
        );
    }
}

// ============================================================================
// URL Path Tests
// ============================================================================

#[test]
fn test_url_path_with_leading_slash() {
    for path in ["/", "/blog", "/docs/v1/", "//double"] {
        assert!(validate_url_path(path).is_ok(), "{} should pass", path);
    }
}

#[test]
fn test_url_path_without_leading_slash() {
    for path in ["blog", "docs/", " /blog", "https://example.com/blog"] {
        let err = validate_url_path(path).unwrap_err();
        assert!(matches!(err, FieldError::PathFormatError(_)));
        assert_eq!(err.to_string(), "Path must start with /");
    }
}

// ============================================================================
// Selection Tests
// ============================================================================

#[test]
fn test_selection_exactly_one() {
    assert_eq!(validate_selection(&["all"]), Ok(CrawlOptionId::All));
    assert_eq!(validate_selection(&["startWith"]), Ok(CrawlOptionId::StartWith));
    assert_eq!(validate_selection(&["one"]), Ok(CrawlOptionId::One));
}

#[test]
fn test_selection_empty() {
    let items: [&str; 0] = [];
    let err = validate_selection(&items).unwrap_err();
    assert!(matches!(err, FieldError::SelectionError(_)));
    assert_eq!(err.to_string(), "Please select exactly one option.");
}

#[test]
fn test_selection_more_than_one() {
    assert!(matches!(
        validate_selection(&["all", "one"]),
        Err(FieldError::SelectionError(_))
    ));
    assert!(matches!(
        validate_selection(&["all", "all"]),
        Err(FieldError::SelectionError(_))
    ));
}

#[test]
fn test_selection_unknown_id() {
    assert!(matches!(
        validate_selection(&["everything"]),
        Err(FieldError::SelectionError(_))
    ));
}

// ============================================================================
// Option Form Tests
// ============================================================================

#[test]
fn test_options_all() {
    let request = validate_options(Some(CrawlOptionId::All), "", "").unwrap();
    assert_eq!(request.scope, CrawlScope::All);
}

#[test]
fn test_options_start_with() {
    let request = validate_options(Some(CrawlOptionId::StartWith), "/blog", "").unwrap();
    assert_eq!(
        request.scope,
        CrawlScope::StartWith {
            url_path: "/blog".to_string()
        }
    );
}

#[test]
fn test_options_one() {
    let request =
        validate_options(Some(CrawlOptionId::One), "", "https://example.com/page").unwrap();
    match request.scope {
        CrawlScope::One { page_url } => assert_eq!(page_url.as_str(), "https://example.com/page"),
        other => panic!("unexpected scope {:?}", other),
    }
}

#[test]
fn test_options_nothing_selected() {
    let errors = validate_options(None, "", "").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors.get(Field::Items),
        Some(FieldError::SelectionError(_))
    ));
}

#[test]
fn test_options_start_with_requires_path_on_submit() {
    let errors = validate_options(Some(CrawlOptionId::StartWith), "", "").unwrap_err();
    let err = errors.get(Field::UrlPath).unwrap();
    assert!(matches!(err, FieldError::RequiredFieldError(_)));
    assert_eq!(err.to_string(), "URL path is required");
}

#[test]
fn test_options_one_requires_page_url_on_submit() {
    let errors = validate_options(Some(CrawlOptionId::One), "", "").unwrap_err();
    let err = errors.get(Field::PageUrl).unwrap();
    assert!(matches!(err, FieldError::RequiredFieldError(_)));
    assert_eq!(err.to_string(), "Page URL is required");
}

#[test]
fn test_edit_phase_skips_required_rules() {
    let errors = option_errors(Some(CrawlOptionId::StartWith), "", "", Phase::Edit);
    assert!(errors.is_empty());

    let errors = option_errors(Some(CrawlOptionId::One), "", "", Phase::Edit);
    assert!(errors.is_empty());
}

#[test]
fn test_edit_phase_reports_format_errors() {
    let errors = option_errors(Some(CrawlOptionId::StartWith), "blog", "", Phase::Edit);
    assert!(matches!(
        errors.get(Field::UrlPath),
        Some(FieldError::PathFormatError(_))
    ));

    let errors = option_errors(Some(CrawlOptionId::One), "", "not-a-url", Phase::Edit);
    assert!(matches!(
        errors.get(Field::PageUrl),
        Some(FieldError::UrlFormatError(_))
    ));
}

#[test]
fn test_options_payload_only_carries_selected_field() {
    let request = validate_options(Some(CrawlOptionId::All), "/ignored", "").unwrap();
    assert_eq!(request.scope, CrawlScope::All);
}

// ============================================================================
// Raw Input Tests
// ============================================================================

fn raw(items: &[&str], url_path: Option<&str>, page_url: Option<&str>) -> RawOptionInput {
    RawOptionInput {
        items: items.iter().map(|s| s.to_string()).collect(),
        url_path: url_path.map(String::from),
        page_url: page_url.map(String::from),
    }
}

#[test]
fn test_raw_two_items_blocked() {
    let errors = validate_raw(&raw(&["all", "one"], None, None)).unwrap_err();
    assert!(matches!(
        errors.get(Field::Items),
        Some(FieldError::SelectionError(_))
    ));
}

#[test]
fn test_raw_reports_every_field() {
    let errors = validate_raw(&raw(&[], Some("blog"), Some("nope"))).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(Field::Items));
    assert!(errors.contains(Field::UrlPath));
    assert!(errors.contains(Field::PageUrl));
}

#[test]
fn test_raw_format_checked_for_unselected_field() {
    let errors = validate_raw(&raw(&["all"], Some("blog"), None)).unwrap_err();
    assert!(matches!(
        errors.get(Field::UrlPath),
        Some(FieldError::PathFormatError(_))
    ));
}

#[test]
fn test_raw_valid_start_with() {
    let request = validate_raw(&raw(&["startWith"], Some("/docs"), None)).unwrap();
    assert_eq!(request.scope.id(), CrawlOptionId::StartWith);
}

#[test]
fn test_errors_display_lists_fields_in_order() {
    let errors = validate_raw(&raw(&[], Some("blog"), None)).unwrap_err();
    assert_eq!(
        errors.to_string(),
        "items: Please select exactly one option.; urlPath: Path must start with /"
    );
}
