//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use jobconnect_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }
}
