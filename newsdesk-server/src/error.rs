//! HTTP mapping for news errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newsdesk_core::NewsError;
use serde::Serialize;

/// Error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A [`NewsError`] on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub NewsError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            NewsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            NewsError::Misconfigured(_)
            | NewsError::UpstreamUnavailable(_)
            | NewsError::UpstreamParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NewsError> for ApiError {
    fn from(err: NewsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
