//! Request types for the shared crate
//!
//! Query-string parameters accepted by every list endpoint.

use crate::serde_helpers::lenient_i64;
use serde::Deserializer;

/// Pagination query parameters
///
/// `startIndex`, when present, overrides the offset computed from
/// `page` / `recordPerPage`. Values that are not integers fall back to their
/// defaults rather than rejecting the request.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based, default: 1)
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: i64,

    /// Items per page (default: 10, max: 100)
    #[serde(
        default = "default_per_page",
        rename = "recordPerPage",
        deserialize_with = "lenient_per_page"
    )]
    pub record_per_page: i64,

    /// Explicit offset
    #[serde(default, rename = "startIndex", deserialize_with = "lenient_i64")]
    pub start_index: Option<i64>,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    10
}

fn lenient_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(lenient_i64(deserializer)?.unwrap_or_else(default_page))
}

fn lenient_per_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(lenient_i64(deserializer)?.unwrap_or_else(default_per_page))
}

/// Upper bound on a single page
pub const MAX_PAGE_SIZE: i64 = 100;

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            record_per_page: default_per_page(),
            start_index: None,
        }
    }
}

impl PaginationQuery {
    pub fn new(page: i64, record_per_page: i64) -> Self {
        Self {
            page,
            record_per_page,
            start_index: None,
        }
    }

    /// Get the limit; values below 1 fall back to the default, large values are clamped
    pub fn limit(&self) -> u64 {
        if self.record_per_page < 1 {
            default_per_page() as u64
        } else {
            self.record_per_page.min(MAX_PAGE_SIZE) as u64
        }
    }

    /// Get the offset for database queries, saturating at `i64::MAX`
    pub fn offset(&self) -> u64 {
        if let Some(start) = self.start_index
            && start >= 0
        {
            return start as u64;
        }
        let page = if self.page < 1 { 1 } else { self.page as u64 };
        (page - 1).saturating_mul(self.limit()).min(i64::MAX as u64)
    }
}
