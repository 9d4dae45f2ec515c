// Validated payload handed to whatever eventually starts a crawl

use crate::option::CrawlOptionId;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "option", rename_all = "camelCase")]
pub enum CrawlScope {
    All,
    #[serde(rename_all = "camelCase")]
    StartWith { url_path: String },
    #[serde(rename_all = "camelCase")]
    One { page_url: Url },
}

impl CrawlScope {
    pub fn id(&self) -> CrawlOptionId {
        match self {
            CrawlScope::All => CrawlOptionId::All,
            CrawlScope::StartWith { .. } => CrawlOptionId::StartWith,
            CrawlScope::One { .. } => CrawlOptionId::One,
        }
    }
}

/// The option form after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub scope: CrawlScope,
}

impl CrawlRequest {
    pub fn new(scope: CrawlScope) -> Self {
        Self { scope }
    }

    /// Compact JSON, used for the diagnostic log line
    pub fn to_json(&self) -> String {
        // Every field is a plain string or a Url, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
