//! News search handler

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use newsdesk_core::{NewsError, NewsQuery, NewsQueryResult};

/// Query parameters accepted by `/news`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NewsParams {
    /// Search terms (required)
    pub query: Option<String>,

    /// Language code, "en" when omitted
    pub language: Option<String>,

    /// Cursor taken from a previous response's `nextPage`
    pub page: Option<String>,

    pub country: Option<String>,
    pub category: Option<String>,
}

impl NewsParams {
    /// Collect known parameters from raw pairs.
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "query" => &mut params.query,
                "language" => &mut params.language,
                "page" => &mut params.page,
                "country" => &mut params.country,
                "category" => &mut params.category,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Search the upstream news API and return its results unchanged
pub async fn search_news(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<NewsQueryResult>, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected malformed news query string");
        NewsError::InvalidRequest(rejection.body_text())
    })?;

    lookup(&state, NewsParams::from_pairs(pairs)).await.map(Json)
}

#[tracing::instrument(
    skip_all,
    fields(
        query = params.query.as_deref().unwrap_or_default(),
        language = params.language.as_deref().unwrap_or_default(),
        page = params.page.as_deref().unwrap_or_default(),
        country = params.country.as_deref().unwrap_or_default(),
        category = params.category.as_deref().unwrap_or_default(),
    )
)]
async fn lookup(state: &AppState, params: NewsParams) -> Result<NewsQueryResult, ApiError> {
    let result = match NewsQuery::from_params(
        params.query,
        params.language,
        params.page,
        params.country,
        params.category,
    ) {
        Ok(query) => state.news.fetch(&query).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(result) => {
            tracing::debug!(
                total_results = result.total_results,
                returned = result.results.len(),
                has_next_page = result.has_next_page(),
                "News lookup succeeded"
            );
            Ok(result)
        }
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, "Rejected news request");
            Err(e.into())
        }
        Err(e) => {
            tracing::error!(error = %e, "News lookup failed");
            Err(e.into())
        }
    }
}
