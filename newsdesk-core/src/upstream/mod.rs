//! Upstream news API abstraction

mod newsdata;

pub use newsdata::{NewsDataClient, DEFAULT_BASE_URL};

use crate::error::Result;
use crate::types::{NewsQuery, NewsQueryResult};
use async_trait::async_trait;

/// Anything that can answer a news search.
///
/// Implementations perform at most one upstream request per call and never
/// retry.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch one page of results for the given query
    async fn fetch(&self, query: &NewsQuery) -> Result<NewsQueryResult>;
}
