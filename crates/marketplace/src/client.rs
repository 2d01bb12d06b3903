//! HTTP client for the marketplace API.
//!
//! This module provides the [`MarketplaceApi`] trait the orchestration layer
//! refreshes through, plus the reqwest-backed implementation used in
//! production. Tests substitute their own trait implementations to script
//! list contents without network I/O.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::MarketplaceError;
use crate::models::{OfferRecord, WishRecord};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum response-body excerpt carried in a status error.
const ERROR_BODY_EXCERPT_CHARS: usize = 200;

/// Default base URL for the marketplace API.
pub const DEFAULT_MARKETPLACE_API_URL: &str = "https://api.matchboard.app/api/v1";

/// Read access to the marketplace collections.
///
/// Both lists come back ordered newest-first; callers rely on that ordering
/// and implementations must not re-sort.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Fetch the full wish collection.
    async fn fetch_wishes(&self) -> Result<Vec<WishRecord>, MarketplaceError>;

    /// Fetch the full offer collection.
    async fn fetch_offers(&self) -> Result<Vec<OfferRecord>, MarketplaceError>;
}

/// Reqwest-backed [`MarketplaceApi`] implementation.
///
/// # Example
///
/// ```ignore
/// let client = HttpMarketplaceClient::new("https://api.matchboard.app/api/v1")?;
/// let wishes = client.fetch_wishes().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpMarketplaceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMarketplaceClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or the HTTP client cannot
    /// be initialized.
    pub fn new(base_url: &str) -> Result<Self, MarketplaceError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(MarketplaceError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Create default headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, MarketplaceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[MarketplaceApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(MarketplaceError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_EXCERPT_CHARS).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| MarketplaceError::Decode {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceClient {
    async fn fetch_wishes(&self) -> Result<Vec<WishRecord>, MarketplaceError> {
        self.get("/wishes").await
    }

    async fn fetch_offers(&self) -> Result<Vec<OfferRecord>, MarketplaceError> {
        self.get("/offers").await
    }
}
