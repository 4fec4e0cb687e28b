//! Error types for the Warfish client and proxy server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the TTL cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No live entry exists for the key (never inserted, removed or expired)
    #[error("No such key: {0}")]
    NoSuchKey(String),
}

// == Warfish Error Enum ==
/// Unified error type for the Warfish client.
#[derive(Error, Debug)]
pub enum WarfishError {
    /// No session cookie configured
    #[error("No Warfish cookie configured (set WARFISH_COOKIE)")]
    NoCookie,

    /// Upstream answered with a non-success status
    #[error("{method} request failed with status {status}")]
    FetchFailed { method: String, status: u16 },

    /// Transport or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected layout
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Upstream envelope reported a non-"ok" stat
    #[error("{method} returned stat '{stat}'")]
    Stat { method: String, stat: String },

    /// A field could not be converted to its typed form
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidField { field: &'static str, value: String },

    /// History entry with an unrecognized action code
    #[error("Unknown action code: {0}")]
    UnknownActionCode(String),

    /// No map image found in any known format
    #[error("Unable to find map image for board {0}")]
    MapImageNotFound(u32),

    /// Cache lookup failed
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == IntoResponse Implementation ==
impl IntoResponse for WarfishError {
    fn into_response(self) -> Response {
        let status = match &self {
            WarfishError::NoCookie => StatusCode::INTERNAL_SERVER_ERROR,
            WarfishError::FetchFailed { .. }
            | WarfishError::Http(_)
            | WarfishError::Decode(_)
            | WarfishError::Stat { .. }
            | WarfishError::InvalidField { .. }
            | WarfishError::UnknownActionCode(_) => StatusCode::BAD_GATEWAY,
            WarfishError::MapImageNotFound(_) | WarfishError::Cache(_) => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Warfish client.
pub type Result<T> = std::result::Result<T, WarfishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_such_key_message() {
        let err = CacheError::NoSuchKey("0-rules_1".to_string());
        assert_eq!(err.to_string(), "No such key: 0-rules_1");
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (WarfishError::NoCookie, StatusCode::INTERNAL_SERVER_ERROR),
            (
                WarfishError::FetchFailed {
                    method: "warfish.tables.getState".to_string(),
                    status: 503,
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                WarfishError::Stat {
                    method: "warfish.tables.getState".to_string(),
                    stat: "fail".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (WarfishError::MapImageNotFound(7), StatusCode::NOT_FOUND),
            (
                WarfishError::Cache(CacheError::NoSuchKey("k".to_string())),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
