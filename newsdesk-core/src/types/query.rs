//! Validated search parameters

use crate::error::{NewsError, Result};

/// Language used when the caller does not ask for one
pub const DEFAULT_LANGUAGE: &str = "en";

/// A search request that has passed validation.
///
/// `query` is never blank and `language` is always set. The optional
/// filters are `None` rather than empty strings, so only meaningful
/// parameters are forwarded upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub query: String,
    pub language: String,

    /// Opaque pagination cursor from a previous `nextPage`
    pub page: Option<String>,

    pub country: Option<String>,
    pub category: Option<String>,
}

impl NewsQuery {
    /// Create a query with the default language and no filters
    pub fn new(query: impl Into<String>) -> Result<Self> {
        Self::from_params(Some(query.into()), None, None, None, None)
    }

    /// Build a query from raw request parameters.
    ///
    /// Fails with [`NewsError::InvalidRequest`] when `query` is absent or
    /// blank. A blank `language` falls back to [`DEFAULT_LANGUAGE`].
    pub fn from_params(
        query: Option<String>,
        language: Option<String>,
        page: Option<String>,
        country: Option<String>,
        category: Option<String>,
    ) -> Result<Self> {
        let query = non_blank(query)
            .ok_or_else(|| NewsError::InvalidRequest("query is required".to_string()))?;

        Ok(Self {
            query,
            language: non_blank(language).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            page: non_blank(page),
            country: non_blank(country),
            category: non_blank(category),
        })
    }

    /// Set the pagination cursor
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = non_blank(Some(page.into()));
        self
    }

    /// Restrict results to a country code
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_blank(Some(country.into()));
        self
    }

    /// Restrict results to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(Some(category.into()));
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_is_invalid() {
        let err = NewsQuery::from_params(None, None, None, None, None).unwrap_err();
        assert_eq!(err, NewsError::InvalidRequest("query is required".to_string()));
    }

    #[test]
    fn test_blank_query_is_invalid() {
        assert!(NewsQuery::new("").is_err());
        assert!(NewsQuery::new("   ").is_err());
    }

    #[test]
    fn test_query_is_kept_verbatim() {
        let query = NewsQuery::new(" go lang ").unwrap();
        assert_eq!(query.query, " go lang ");
    }

    #[test]
    fn test_blank_language_uses_default() {
        let query =
            NewsQuery::from_params(Some("rust".into()), Some("".into()), None, None, None).unwrap();
        assert_eq!(query.language, "en");

        let query =
            NewsQuery::from_params(Some("rust".into()), Some("fr".into()), None, None, None)
                .unwrap();
        assert_eq!(query.language, "fr");
    }

    #[test]
    fn test_blank_filters_become_none() {
        let query = NewsQuery::from_params(
            Some("rust".into()),
            None,
            Some("".into()),
            Some(" ".into()),
            Some("technology".into()),
        )
        .unwrap();
        assert_eq!(query.page, None);
        assert_eq!(query.country, None);
        assert_eq!(query.category.as_deref(), Some("technology"));
    }

    #[test]
    fn test_builder_setters() {
        let query = NewsQuery::new("rust")
            .unwrap()
            .with_page("cursor123")
            .with_country("us")
            .with_category("");
        assert_eq!(query.page.as_deref(), Some("cursor123"));
        assert_eq!(query.country.as_deref(), Some("us"));
        assert_eq!(query.category, None);
    }
}
