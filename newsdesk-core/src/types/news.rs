//! News result types, shaped exactly like the upstream payload

use serde::{Deserialize, Deserializer, Serialize};

/// A single article as reported by the upstream news API.
///
/// Every field is optional and passed through untouched. A `null` stays
/// `null` and an empty list stays empty, so re-serializing a decoded item
/// reproduces the upstream JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsItem {
    #[serde(default)]
    pub article_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    /// Authors, in upstream order
    #[serde(default)]
    pub creator: Option<Vec<String>>,

    #[serde(default)]
    pub description: Option<String>,

    /// Publication date in whatever format upstream uses; never parsed
    #[serde(default, rename = "pubDate")]
    pub publication_date: Option<String>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub source_id: Option<String>,

    #[serde(default)]
    pub source_name: Option<String>,

    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub source_icon: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub country: Option<Vec<String>>,

    #[serde(default)]
    pub category: Option<Vec<String>>,
}

/// One page of search results
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsQueryResult {
    /// Upstream status string, e.g. "success"
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(default, rename = "totalResults", deserialize_with = "null_as_default")]
    pub total_results: u64,

    /// Opaque cursor for the next page, `None` on the last page
    #[serde(default, rename = "nextPage")]
    pub next_page: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<NewsItem>,
}

/// Envelope fields treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewsQueryResult {
    /// Decode an upstream response body
    pub fn from_slice(body: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Whether upstream reported another page
    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }
}
