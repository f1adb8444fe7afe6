//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Origins allowed when none are configured (frontend dev servers)
const DEV_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.cors_origins.as_deref());

    Router::new()
        .route("/news", get(handlers::search_news))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from a configured origin list.
/// "*" allows any origin, otherwise a comma-separated list is expected.
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            AllowOrigin::list(allowed)
        }
        None => AllowOrigin::list(DEV_ORIGINS.map(HeaderValue::from_static)),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use newsdesk_core::{NewsQuery, NewsQueryResult, NewsSource};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EmptySource;

    #[async_trait]
    impl NewsSource for EmptySource {
        async fn fetch(&self, _query: &NewsQuery) -> newsdesk_core::Result<NewsQueryResult> {
            Ok(NewsQueryResult::default())
        }
    }

    fn app(origins: Option<&str>) -> Router {
        let mut state = AppState::with_source(Arc::new(EmptySource));
        state.cors_origins = origins.map(str::to_string);
        create_router(state)
    }

    async fn allowed_origin(app: Router, origin: &str) -> Option<String> {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_default_cors_allows_dev_frontend() {
        let origin = allowed_origin(app(None), "http://localhost:3000").await;
        assert_eq!(origin.as_deref(), Some("http://localhost:3000"));

        let origin = allowed_origin(app(None), "http://evil.example").await;
        assert_eq!(origin, None);
    }

    #[tokio::test]
    async fn test_wildcard_cors() {
        let origin = allowed_origin(app(Some("*")), "http://anywhere.example").await;
        assert_eq!(origin.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_cors_origins() {
        let app = app(Some("https://news.example, https://other.example"));
        let origin = allowed_origin(app, "https://other.example").await;
        assert_eq!(origin.as_deref(), Some("https://other.example"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app(None)
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }
}
