//! newsdata.io client

use super::NewsSource;
use crate::error::{NewsError, Result};
use crate::types::{NewsQuery, NewsQueryResult};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Endpoint for the latest-news search
pub const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1/latest";

const REDACTED: &str = "REDACTED";

/// News source backed by the newsdata.io HTTP API
#[derive(Debug, Clone)]
pub struct NewsDataClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NewsDataClient {
    /// Create a client for the public endpoint.
    ///
    /// A missing or blank key is accepted here; lookups then fail with
    /// [`NewsError::Misconfigured`] before touching the network.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Point the client at a different endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Build the upstream URL for a query.
    ///
    /// `apikey`, `q` and `language` are always present; `page`, `country`
    /// and `category` only when set. All values are percent-encoded.
    pub fn request_url(&self, api_key: &str, query: &NewsQuery) -> String {
        let mut params: Vec<(&str, &str)> = vec![
            ("apikey", api_key),
            ("q", query.query.as_str()),
            ("language", query.language.as_str()),
        ];
        if let Some(page) = &query.page {
            params.push(("page", page.as_str()));
        }
        if let Some(country) = &query.country {
            params.push(("country", country.as_str()));
        }
        if let Some(category) = &query.category {
            params.push(("category", category.as_str()));
        }

        let encoded: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();

        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base_url, separator, encoded.join("&"))
    }
}

#[async_trait]
impl NewsSource for NewsDataClient {
    #[instrument(skip(self, query), fields(q = %query.query, language = %query.language))]
    async fn fetch(&self, query: &NewsQuery) -> Result<NewsQueryResult> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| NewsError::Misconfigured("news API key is not configured".into()))?;

        let url = self.request_url(api_key, query);
        debug!(url = %self.request_url(REDACTED, query), "Calling upstream news API");

        let response = self.http.get(&url).send().await.map_err(without_url)?;

        let status = response.status();
        if !status.is_success() {
            // Body is still decoded; error envelopes fail to parse below
            warn!(%status, "Upstream news API returned non-success status");
        }

        let body = response.bytes().await.map_err(without_url)?;
        NewsQueryResult::from_slice(&body)
    }
}

/// reqwest errors embed the request URL, which carries the API key
fn without_url(err: reqwest::Error) -> NewsError {
    err.without_url().into()
}
