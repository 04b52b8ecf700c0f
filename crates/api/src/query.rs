//! Shared request body types for API handlers.

use serde::Deserialize;

/// Body of `POST /venues/search` and `POST /artists/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}
