// Stand-in for the crawl trigger: log the payload, wait, report success.

use crate::config::FormConfig;
use crate::error::SubmitError;
use crate::form::OptionsForm;
use crate::request::CrawlRequest;
use std::time::Instant;
use tracing::info;

pub type SubmitResult = Result<CrawlRequest, SubmitError>;

/// Write an accepted payload to the diagnostic channel. Nothing is sent.
pub fn log_payload(request: &CrawlRequest) {
    info!(
        option = %request.scope.id(),
        payload = %request.to_json(),
        "Crawl request accepted"
    );
}

/// Async driver for the simulated submission delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Submitter {
    config: FormConfig,
}

impl Submitter {
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    /// Submit the form and hold it in `Submitting` for the configured delay.
    pub async fn submit(&self, form: &mut OptionsForm) -> SubmitResult {
        let request = form.begin_submit(Instant::now())?;
        tokio::time::sleep(self.config.submit_delay).await;
        form.finish_submission();
        Ok(request)
    }

    /// Same as [`submit`](Self::submit) for a payload validated elsewhere
    pub async fn submit_request(&self, request: CrawlRequest) -> CrawlRequest {
        log_payload(&request);
        tokio::time::sleep(self.config.submit_delay).await;
        request
    }
}
