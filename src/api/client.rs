//! HTTP implementation of [`FoodApi`] using a blocking `reqwest` client
//!
//! Calls block the calling thread; the TUI runs them on worker threads
//! (see [`crate::worker`]) so the event loop never waits on the network.

use super::{ApiError, FoodApi, Result};
use crate::models::{FdcId, FoodDetail, SearchResult};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Backend location used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Connection timeout, independent of the overall request timeout
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Failure body sent by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// REST client for the food search backend
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: String,
}

impl HttpFoodApi {
    /// Create a client for the backend rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if `base_url` is not an absolute
    /// http(s) URL, or `ApiError::Connection` if the HTTP client cannot be
    /// initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let parsed =
            Url::parse(&base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Base URL every endpoint is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        debug!(url, ?query, "sending request");
        self.client.get(url).query(query).send().map_err(|e| {
            warn!(url, error = %e, "request failed before a response arrived");
            ApiError::Connection(e.to_string())
        })
    }
}

/// Decode a response body, mapping failure statuses to `ApiError::Api`
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| ApiError::Connection(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        warn!(status = status.as_u16(), ?message, "backend returned an error");
        return Err(ApiError::from_status(status.as_u16(), message));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

impl FoodApi for HttpFoodApi {
    fn search(&self, query: &str, page: u32) -> Result<SearchResult> {
        let url = format!("{}/search", self.base_url);
        let response = self.send(&url, &[("query", query.to_string()), ("page", page.to_string())])?;
        let result: SearchResult = read_json(response)?;

        if !result.is_within_page_size() {
            warn!(
                count = result.foods.len(),
                page_size = result.page_size,
                "backend returned more foods than its page size"
            );
        }
        debug!(query, page, total = result.total, count = result.foods.len(), "search completed");
        Ok(result)
    }

    fn get_detail(&self, id: &FdcId) -> Result<FoodDetail> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["food", id.as_str()]);

        let response = self.send(url.as_str(), &[])?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%id, "food not found");
            return Err(ApiError::NotFound);
        }

        let detail: FoodDetail = read_json(response)?;
        debug!(%id, description = %detail.description, "detail fetched");
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let api = HttpFoodApi::new("http://localhost:8000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_new_rejects_invalid_urls() {
        let timeout = Duration::from_secs(5);
        assert!(matches!(
            HttpFoodApi::new("not a url", timeout),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpFoodApi::new("ftp://example.com/api", timeout),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
