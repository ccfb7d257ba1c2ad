//! Pagination request and result envelope.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Pagination request for order listings.
///
/// Bounds are enforced at the boundary via [`Validate`] before the filter
/// reaches the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderFilter {
    #[validate(range(min = 1))]
    #[serde(default = "default_page_number")]
    pub page_number: u32,

    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

/// One page of a larger collection plus the metadata to reconstruct
/// pagination.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T> {
    pub data: Vec<T>,
    /// Count across all pages, ignoring the filter.
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PagedResult<T> {
    /// Wrap one page, echoing the requested page coordinates.
    pub fn new(data: Vec<T>, total_count: u64, page_number: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size as u64) as u32
        };
        Self {
            data,
            total_count,
            page_number,
            page_size,
            total_pages,
        }
    }
}
