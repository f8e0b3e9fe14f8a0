//! Cloud Controller v2 API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{ListingApi, UsageApi};
use super::models::{
    AppEntity, MemoryUsage, OrganizationEntity, QuotaDefinitionEntity, Resource, SpaceEntity,
};
use super::pagination::{MAX_PAGE_SIZE, PagedResponse, PaginationParams};
use super::parallel::fetch_remaining_pages;
use crate::config::Session;
use crate::error::{ApiError, Result};

/// Client-side request ceiling
const RATE_LIMIT_PER_SECOND: u32 = 20;

/// Maximum number of pages of one listing requested at once
const MAX_CONCURRENT_PAGES: usize = 4;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloud Controller API client
///
/// Cheap to clone; clones share the HTTP connection pool and rate limiter.
#[derive(Clone)]
pub struct CloudControllerClient {
    http: HttpClient,
    base_url: String,
    authorization: String,
    results_per_page: usize,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

/// Build the `Authorization` header value from a stored token.
///
/// Tokens copied from `cf oauth-token` already carry the `bearer ` prefix.
fn authorization_header(token: &str) -> String {
    let token = token.trim();
    match token.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => {
            format!("Bearer {}", token[7..].trim_start())
        }
        _ => format!("Bearer {}", token),
    }
}

impl CloudControllerClient {
    /// Create a new client for a resolved session
    pub fn new(session: &Session) -> Result<Self> {
        Self::with_base_url(
            &session.api_endpoint,
            &session.access_token,
            session.results_per_page,
        )
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(
        base_url: &str,
        access_token: &str,
        results_per_page: usize,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        )));

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            authorization: authorization_header(access_token),
            results_per_page: results_per_page.clamp(1, MAX_PAGE_SIZE),
            rate_limiter,
        })
    }

    /// Resolve a v2 link against the API endpoint.
    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = self.url_for(path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header("Authorization", self.authorization.as_str())
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!(
                        "Failed to parse response from {}: {}",
                        path, e
                    ))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }

    /// Fetch every page of a v2 listing.
    async fn get_all<T>(&self, path: &str) -> Result<Vec<Resource<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let per_page = self.results_per_page;
        let params = PaginationParams::new().results_per_page(per_page).page(1);
        let first: PagedResponse<T> = self.get(path, &params.to_query_params()).await?;
        debug!(
            "{}: {} results over {} pages",
            path, first.total_results, first.total_pages
        );

        if !first.has_more_pages() {
            return Ok(first.resources);
        }

        let remaining = first.remaining_pages();
        let mut resources = first.resources;

        let client = self.clone();
        let path = path.to_string();
        let rest = fetch_remaining_pages(
            remaining,
            move |page| {
                let client = client.clone();
                let path = path.clone();
                async move {
                    let params = PaginationParams::new().results_per_page(per_page).page(page);
                    let response: PagedResponse<T> =
                        client.get(&path, &params.to_query_params()).await?;
                    Ok(response.resources)
                }
            },
            MAX_CONCURRENT_PAGES,
        )
        .await?;

        resources.extend(rest);
        Ok(resources)
    }
}

#[async_trait]
impl ListingApi for CloudControllerClient {
    async fn list_orgs(&self) -> Result<Vec<Resource<OrganizationEntity>>> {
        self.get_all("/v2/organizations").await
    }

    async fn list_spaces(&self, spaces_url: &str) -> Result<Vec<Resource<SpaceEntity>>> {
        self.get_all(spaces_url).await
    }

    async fn list_apps(&self, apps_url: &str) -> Result<Vec<Resource<AppEntity>>> {
        self.get_all(apps_url).await
    }
}

#[async_trait]
impl UsageApi for CloudControllerClient {
    async fn org_memory_usage(&self, org_guid: &str) -> Result<u64> {
        let path = format!("/v2/organizations/{}/memory_usage", org_guid);
        let usage: MemoryUsage = self.get(&path, &[]).await?;
        Ok(usage.memory_usage_in_mb)
    }

    async fn quota_memory_limit(&self, quota_url: &str) -> Result<u64> {
        let quota: Resource<QuotaDefinitionEntity> = self.get(quota_url, &[]).await?;
        Ok(quota.entity.memory_limit_mb())
    }
}
