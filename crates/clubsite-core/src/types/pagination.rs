//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 6;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 20;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// Out-of-range values fall back to the defaults rather than being
    /// clamped: a non-positive page becomes 1 and a limit outside
    /// `1..=MAX_PAGE_SIZE` becomes `DEFAULT_PAGE_SIZE`.
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p > 0 => p as u64,
            _ => 1,
        };
        let limit = match limit {
            Some(l) if l > 0 && l as u64 <= MAX_PAGE_SIZE => l as u64,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, limit }
    }

    /// Calculate the SQL `OFFSET` value. Saturates for huge page numbers.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages (0 when there are no items).
    pub total_pages: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit),
        }
    }
}
