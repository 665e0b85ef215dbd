use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One article as returned by the Newsdata.io `results` list.
///
/// The upstream API guarantees none of these fields, so every one is
/// optional in the wire shape; rendering substitutes the documented
/// defaults instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source_id: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    pub description: Option<String>,
}

impl ArticleRecord {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or("")
    }

    pub fn source_id(&self) -> &str {
        self.source_id.as_deref().unwrap_or("unknown")
    }

    pub fn pub_date(&self) -> &str {
        self.pub_date.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Exchange rates relative to a single base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxSnapshot {
    pub base: String,
    /// Code -> rate. A `BTreeMap` so iteration (and rendering) order is
    /// deterministic; the upstream JSON object carries no meaningful order.
    pub rates: BTreeMap<String, f64>,
    pub last_updated: Option<String>,
}

/// Everything a single rendered digest combines. Transient: built per
/// generation, consumed by the composer, then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
    pub articles: Vec<ArticleRecord>,
    pub fx: FxSnapshot,
    pub generated_at: chrono::DateTime<chrono::Local>,
}
