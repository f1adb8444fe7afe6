//! Request handlers

mod news;

pub use news::*;

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub time: DateTime<Utc>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is healthy",
        version: env!("CARGO_PKG_VERSION"),
        time: Utc::now(),
    })
}
