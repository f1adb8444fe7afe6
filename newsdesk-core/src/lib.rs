//! Newsdesk Core Library
//!
//! Data model, query validation and the upstream client for the Newsdesk
//! news proxy. Results from the upstream news API are decoded into
//! [`NewsQueryResult`] and handed back unchanged.

pub mod error;
pub mod types;
pub mod upstream;

pub use error::{NewsError, Result};
pub use types::{NewsItem, NewsQuery, NewsQueryResult, DEFAULT_LANGUAGE};
pub use upstream::{NewsDataClient, NewsSource, DEFAULT_BASE_URL};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults_language() {
        let query = NewsQuery::new("rust").unwrap();
        assert_eq!(query.query, "rust");
        assert_eq!(query.language, DEFAULT_LANGUAGE);
    }
}
