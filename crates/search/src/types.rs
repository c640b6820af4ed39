//! Request/response value types for the search service.

use serde::{Deserialize, Serialize};

/// Parameters for one search call.
#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub query: String,
    /// Upstream search backend to use, when the caller cares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    pub max_results: u32,
    /// Restrict results to these sites; empty means no restriction.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub site_filters: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
}

impl SearchQuery {
    /// A plain query with the default result budget.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            service: None,
            max_results: 5,
            site_filters: Vec::new(),
            language: None,
            time_range: None,
        }
    }
}

/// One search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}
