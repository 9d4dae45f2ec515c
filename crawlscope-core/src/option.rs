// Static catalog of crawl scopes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a crawl scope choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrawlOptionId {
    /// Crawl every page found on the site
    All,
    /// Crawl pages under a path prefix
    StartWith,
    /// Crawl a single page
    One,
}

impl CrawlOptionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlOptionId::All => "all",
            CrawlOptionId::StartWith => "startWith",
            CrawlOptionId::One => "one",
        }
    }

    /// Catalog entry for this id
    pub fn option(&self) -> &'static CrawlOption {
        match self {
            CrawlOptionId::All => &CATALOG[0],
            CrawlOptionId::StartWith => &CATALOG[1],
            CrawlOptionId::One => &CATALOG[2],
        }
    }
}

impl fmt::Display for CrawlOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrawlOptionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CrawlOptionId::All),
            "startWith" => Ok(CrawlOptionId::StartWith),
            "one" => Ok(CrawlOptionId::One),
            other => Err(format!("unknown crawl option: {}", other)),
        }
    }
}

/// One selectable card in the option form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlOption {
    pub id: CrawlOptionId,
    pub label: &'static str,
    pub description: &'static str,
    /// Glyph drawn next to the label
    pub icon: &'static str,
}

pub static CATALOG: [CrawlOption; 3] = [
    CrawlOption {
        id: CrawlOptionId::All,
        label: "All Pages",
        description: "Crawl every page found on the website",
        icon: "⊕",
    },
    CrawlOption {
        id: CrawlOptionId::StartWith,
        label: "Start With",
        description: "Crawl pages that start with a specific URL path",
        icon: "→",
    },
    CrawlOption {
        id: CrawlOptionId::One,
        label: "One Page",
        description: "Crawl only a specific page",
        icon: "◎",
    },
];

/// The catalog in display order
pub fn catalog() -> &'static [CrawlOption] {
    &CATALOG
}
