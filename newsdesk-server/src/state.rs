//! Application state

use crate::config::ServerConfig;
use newsdesk_core::{NewsDataClient, NewsSource};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where news lookups are sent
    pub news: Arc<dyn NewsSource>,

    /// CORS origins the router should allow
    pub cors_origins: Option<String>,
}

impl AppState {
    /// Create application state backed by the newsdata.io client
    pub fn new(config: &ServerConfig) -> Self {
        let client = NewsDataClient::new(config.api_key.clone())
            .with_base_url(config.upstream_base_url.clone());

        if !client.has_api_key() {
            tracing::warn!("NEWS_API_KEY is not set; /news requests will fail until it is configured");
        }

        Self {
            news: Arc::new(client),
            cors_origins: config.cors_origins.clone(),
        }
    }

    /// Create application state around any news source
    pub fn with_source(news: Arc<dyn NewsSource>) -> Self {
        Self {
            news,
            cors_origins: None,
        }
    }
}
