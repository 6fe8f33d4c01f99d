//! News listing query parameters.

use serde::{Deserialize, Serialize};

use clubsite_core::types::pagination::PageRequest;

/// Query parameters of `GET /api/news`.
///
/// Values are taken as raw strings so that malformed numbers fall back to
/// the defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsListParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default: 6, max: 20).
    pub limit: Option<String>,
    /// `true` or `false` to filter by publication state.
    #[serde(alias = "isPublished")]
    pub is_published: Option<String>,
}

impl NewsListParams {
    /// Converts to a `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(parse_int(&self.page), parse_int(&self.limit))
    }

    /// The publication filter, if one was given.
    pub fn published_filter(&self) -> Option<bool> {
        match self.is_published.as_deref().map(str::trim) {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

fn parse_int(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}
