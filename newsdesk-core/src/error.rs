//! Error types for Newsdesk Core

use thiserror::Error;

/// Result type alias using NewsError
pub type Result<T> = std::result::Result<T, NewsError>;

/// Every way a news lookup can fail.
///
/// All variants are terminal for the request that produced them; nothing
/// in the crate retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsError {
    /// The caller left out a required parameter
    #[error("{0}")]
    InvalidRequest(String),

    /// The server is missing configuration it needs before calling upstream
    #[error("server misconfigured: {0}")]
    Misconfigured(String),

    /// The upstream API could not be reached or the transfer broke off
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The upstream API answered with a body that is not a valid result
    #[error("failed to parse upstream response: {0}")]
    UpstreamParseError(String),
}

impl NewsError {
    /// Whether the error was caused by the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, NewsError::InvalidRequest(_))
    }
}

impl From<serde_json::Error> for NewsError {
    fn from(err: serde_json::Error) -> Self {
        NewsError::UpstreamParseError(err.to_string())
    }
}

impl From<reqwest::Error> for NewsError {
    fn from(err: reqwest::Error) -> Self {
        NewsError::UpstreamUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_request_is_client_error() {
        assert!(NewsError::InvalidRequest("query is required".into()).is_client_error());
        assert!(!NewsError::Misconfigured("x".into()).is_client_error());
        assert!(!NewsError::UpstreamUnavailable("x".into()).is_client_error());
        assert!(!NewsError::UpstreamParseError("x".into()).is_client_error());
    }

    #[test]
    fn test_invalid_request_message_is_bare() {
        let err = NewsError::InvalidRequest("query is required".into());
        assert_eq!(err.to_string(), "query is required");
    }

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let err: NewsError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, NewsError::UpstreamParseError(_)));
    }
}
