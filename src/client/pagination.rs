//! Pagination helpers for Cloud Controller v2 listings
//!
//! Every v2 list endpoint returns the same envelope: totals, prev/next links
//! and a page of `resources`. Pages are 1-indexed.

use serde::{Deserialize, Serialize};

use super::models::Resource;

/// Maximum page size supported by the v2 API.
/// Using this as default minimizes API calls.
pub const MAX_PAGE_SIZE: usize = 100;

/// Pagination parameters for API requests.
///
/// # Example
/// ```ignore
/// let params = PaginationParams::new()
///     .results_per_page(50)
///     .page(2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Number of resources per page (default and max: 100)
    pub results_per_page: Option<usize>,
    /// Page number, starting at 1
    pub page: Option<usize>,
}

impl PaginationParams {
    /// Create new pagination params with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size.
    pub fn results_per_page(mut self, size: usize) -> Self {
        self.results_per_page = Some(size);
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Convert to query string parameters.
    ///
    /// Uses the v2 parameter names:
    /// - `results-per-page`: always sent, clamped to `MAX_PAGE_SIZE`
    /// - `page`: page to fetch (1-indexed)
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let size = self
            .results_per_page
            .unwrap_or(MAX_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        params.push(("results-per-page", size.to_string()));

        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }

        params
    }
}

/// One page of a v2 listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    /// Total number of resources across all pages
    #[serde(default)]
    pub total_results: usize,

    /// Total number of pages
    #[serde(default)]
    pub total_pages: usize,

    /// Link to the previous page
    #[serde(default)]
    pub prev_url: Option<String>,

    /// Link to the next page
    #[serde(default)]
    pub next_url: Option<String>,

    /// The resources on this page
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<T>>,
}

impl<T> PagedResponse<T> {
    /// Check if there are more pages after the first one.
    pub fn has_more_pages(&self) -> bool {
        self.total_pages > 1
    }

    /// Page numbers still to fetch after page 1.
    pub fn remaining_pages(&self) -> Vec<usize> {
        (2..=self.total_pages).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::SpaceEntity;

    #[test]
    fn test_pagination_params_default() {
        let query = PaginationParams::new().to_query_params();
        assert_eq!(query.len(), 1);
        assert!(query.contains(&("results-per-page", MAX_PAGE_SIZE.to_string())));
    }

    #[test]
    fn test_pagination_params_to_query() {
        let params = PaginationParams::new().results_per_page(50).page(3);

        let query = params.to_query_params();
        assert_eq!(query.len(), 2);
        assert!(query.contains(&("results-per-page", "50".to_string())));
        assert!(query.contains(&("page", "3".to_string())));
    }

    #[test]
    fn test_pagination_params_clamps_page_size() {
        let query = PaginationParams::new().results_per_page(500).to_query_params();
        assert!(query.contains(&("results-per-page", "100".to_string())));
    }

    #[test]
    fn test_paged_response_parse() {
        let body = r#"{
            "total_results": 3,
            "total_pages": 2,
            "prev_url": null,
            "next_url": "/v2/organizations/o1/spaces?page=2&results-per-page=2",
            "resources": [
                { "metadata": { "guid": "s1", "url": "/v2/spaces/s1" },
                  "entity": { "name": "dev", "apps_url": "/v2/spaces/s1/apps" } },
                { "metadata": { "guid": "s2", "url": "/v2/spaces/s2" },
                  "entity": { "name": "prod", "apps_url": "/v2/spaces/s2/apps" } }
            ]
        }"#;

        let page: PagedResponse<SpaceEntity> = serde_json::from_str(body).unwrap();

        assert_eq!(page.total_results, 3);
        assert_eq!(page.resources.len(), 2);
        assert_eq!(page.resources[1].entity.name, "prod");
        assert!(page.has_more_pages());
        assert_eq!(page.remaining_pages(), vec![2]);
    }

    #[test]
    fn test_remaining_pages_from_totals() {
        let page: PagedResponse<SpaceEntity> = PagedResponse {
            total_results: 250,
            total_pages: 3,
            prev_url: None,
            next_url: Some("/v2/spaces?page=2".to_string()),
            resources: Vec::new(),
        };

        assert_eq!(page.remaining_pages(), vec![2, 3]);
    }

    #[test]
    fn test_page_without_resources() {
        let page: PagedResponse<SpaceEntity> =
            serde_json::from_str(r#"{"total_results":0,"total_pages":0}"#).unwrap();

        assert!(page.resources.is_empty());
        assert!(page.next_url.is_none());
        assert!(!page.has_more_pages());
    }

    #[test]
    fn test_single_page() {
        let page: PagedResponse<SpaceEntity> =
            serde_json::from_str(r#"{"total_results":0,"total_pages":1,"resources":[]}"#)
                .unwrap();

        assert!(!page.has_more_pages());
        assert!(page.remaining_pages().is_empty());
    }
}
