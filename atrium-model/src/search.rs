//! Cross-collection search contract.

use serde::{Deserialize, Serialize};

/// One normalized hit. `kind` names the resource type the hit came from
/// (`program`, `news`, `event`, `partnership`) and `url` is the public
/// site path of the underlying record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub title: String,
    /// Truncated to 200 characters.
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total: usize,
}
