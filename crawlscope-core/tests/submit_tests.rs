// Tests for the async submission driver

use crawlscope_core::error::SubmitError;
use crawlscope_core::form::{OptionsForm, SubmitStatus};
use crawlscope_core::option::CrawlOptionId;
use crawlscope_core::request::{CrawlRequest, CrawlScope};
use crawlscope_core::{FormConfig, Submitter};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_submit_waits_for_delay() {
    let config = FormConfig::default();
    let submitter = Submitter::new(config);
    let mut form = OptionsForm::new(config);
    form.toggle(CrawlOptionId::StartWith);
    form.set_url_path("/blog");

    let start = tokio::time::Instant::now();
    let request = submitter.submit(&mut form).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(
        request.scope,
        CrawlScope::StartWith {
            url_path: "/blog".to_string()
        }
    );
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_submit_invalid_returns_immediately() {
    let submitter = Submitter::default();
    let mut form = OptionsForm::default();
    form.toggle(CrawlOptionId::One);

    let start = tokio::time::Instant::now();
    let result = submitter.submit(&mut form).await;

    assert!(matches!(result, Err(SubmitError::Invalid(_))));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_submit_request_uses_configured_delay() {
    let submitter = Submitter::new(FormConfig::default().with_submit_delay_ms(250));
    let request = CrawlRequest::new(CrawlScope::All);

    let start = tokio::time::Instant::now();
    let echoed = submitter.submit_request(request.clone()).await;

    assert_eq!(echoed, request);
    assert!(start.elapsed() >= Duration::from_millis(250));
}

#[test]
fn test_payload_json_shape() {
    let request = CrawlRequest::new(CrawlScope::StartWith {
        url_path: "/blog".to_string(),
    });
    assert_eq!(
        request.to_json(),
        r#"{"scope":{"option":"startWith","urlPath":"/blog"}}"#
    );

    let all = CrawlRequest::new(CrawlScope::All);
    assert_eq!(all.to_json(), r#"{"scope":{"option":"all"}}"#);
}
